use crate::error::CatalogError;
use crate::repository::product_repository::ProductRepository;
use crate::repository::SharedSqliteConnection;
use crate::types::{Product, ProductDraft};
use log::debug;
use rusqlite::{named_params, params, OptionalExtension, Row};

pub struct SqliteProductRepository {
    connection: SharedSqliteConnection,
}

/// SQL statement to create the `produtos` table.
const CREATE_PRODUCT_TABLE_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS produtos (
        id integer PRIMARY KEY,
        produto text NOT NULL,
        setor text NOT NULL,
        lancamento text NOT NULL,
        qualificacao integer NOT NULL,
        treinamento integer NOT NULL,
        manual_datasheet integer NOT NULL,
        laboratorio integer NOT NULL
    );
";

const SELECT_PRODUCT_SQL: &str = r"
    SELECT id, produto, setor, lancamento, qualificacao, treinamento, manual_datasheet, laboratorio
    FROM produtos";

/// Creates the `produtos` table in the database.
pub fn create_product_table(connection: &SharedSqliteConnection) -> Result<(), CatalogError> {
    let conn = connection.lock().map_err(|_| CatalogError::LockPoisoned)?;
    conn.execute(CREATE_PRODUCT_TABLE_SQL, [])
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;
    Ok(())
}

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        sector: row.get(2)?,
        released: row.get(3)?,
        qualification: row.get(4)?,
        training: row.get(5)?,
        manual_datasheet: row.get(6)?,
        laboratory: row.get(7)?,
    })
}

impl SqliteProductRepository {
    pub(crate) fn new(connection: SharedSqliteConnection) -> Self {
        Self { connection }
    }
}

impl ProductRepository for SqliteProductRepository {
    fn add_product(&self, draft: &ProductDraft) -> Result<Product, CatalogError> {
        debug!("Adding {:?} to DBMS", &draft);
        let conn = self
            .connection
            .lock()
            .map_err(|_e| CatalogError::LockPoisoned)?;
        let id: i64 = conn
            .query_row(
                r"INSERT INTO produtos (
                    produto, setor, lancamento, qualificacao, treinamento, manual_datasheet, laboratorio
                ) VALUES (
                    :produto, :setor, :lancamento, :qualificacao, :treinamento, :manual_datasheet, :laboratorio
                ) RETURNING id",
                named_params! {
                    ":produto": draft.name,
                    ":setor": draft.sector,
                    ":lancamento": draft.released.to_string(),
                    ":qualificacao": draft.scores.qualification(),
                    ":treinamento": draft.scores.training,
                    ":manual_datasheet": draft.scores.manual_datasheet,
                    ":laboratorio": draft.scores.laboratory,
                },
                |row| row.get(0),
            )
            .map_err(|e| CatalogError::Sql(format!("Unable to insert into produtos: {e}")))?;

        debug!("Product inserted with id {id}");
        Ok(Product::from_draft(id, draft))
    }

    fn update_product(&self, id: i64, draft: &ProductDraft) -> Result<Product, CatalogError> {
        debug!("Updating product {id} with {:?}", &draft);
        let conn = self
            .connection
            .lock()
            .map_err(|_e| CatalogError::LockPoisoned)?;
        let rows_affected = conn.execute(
            r"UPDATE produtos
              SET produto = ?, setor = ?, lancamento = ?, qualificacao = ?,
                  treinamento = ?, manual_datasheet = ?, laboratorio = ?
              WHERE id = ?",
            params![
                draft.name,
                draft.sector,
                draft.released.to_string(),
                draft.scores.qualification(),
                draft.scores.training,
                draft.scores.manual_datasheet,
                draft.scores.laboratory,
                id,
            ],
        )?;

        if rows_affected == 0 {
            return Err(CatalogError::ProductNotFound(id));
        }
        Ok(Product::from_draft(id, draft))
    }

    fn remove_product(&self, id: i64) -> Result<(), CatalogError> {
        debug!("Removing product {id}");
        let conn = self
            .connection
            .lock()
            .map_err(|_| CatalogError::LockPoisoned)?;
        let rows_affected = conn.execute("DELETE FROM produtos WHERE id = ?1", params![id])?;

        if rows_affected == 0 {
            return Err(CatalogError::ProductNotFound(id));
        }
        Ok(())
    }

    fn find_product_by_id(&self, id: i64) -> Result<Option<Product>, CatalogError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_e| CatalogError::LockPoisoned)?;
        let mut stmt = conn.prepare(&format!("{SELECT_PRODUCT_SQL} WHERE id = ?1"))?;
        let product = stmt
            .query_row(params![id], product_from_row)
            .optional()?;
        Ok(product)
    }

    fn find_all_products(&self) -> Result<Vec<Product>, CatalogError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_e| CatalogError::LockPoisoned)?;
        let mut stmt = conn.prepare(&format!("{SELECT_PRODUCT_SQL} ORDER BY id"))?;
        let products = stmt
            .query_map([], product_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(products)
    }

    fn get_count(&self) -> Result<i64, CatalogError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_e| CatalogError::LockPoisoned)?;
        let mut stmt = conn.prepare("select count(*) from produtos").map_err(|e| {
            CatalogError::Sql(format!("Unable to retrieve count(*) from produtos: {e}"))
        })?;
        let count = stmt.query_row([], |row| row.get(0))?;
        Ok(count)
    }
}
