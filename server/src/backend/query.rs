//! PostgREST select builder.
//!
//! Covers the subset the site needs: a column list (including embedded
//! joins), equality filters and ordering.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    collection: String,
    columns: String,
    filters: Vec<(String, String)>,
    order: Vec<(String, Direction)>,
}

impl Select {
    /// Select every column of `collection`.
    #[must_use]
    pub fn from(collection: &str) -> Self {
        Self {
            collection: collection.to_owned(),
            columns: "*".to_owned(),
            filters: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Replace the column list. Whitespace (including newlines in embedded
    /// join syntax) is stripped.
    #[must_use]
    pub fn columns(mut self, columns: &str) -> Self {
        self.columns = columns.split_whitespace().collect();
        self
    }

    #[must_use]
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push((column.to_owned(), format!("eq.{}", value.to_string())));
        self
    }

    #[must_use]
    pub fn order(mut self, column: &str) -> Self {
        self.order.push((column.to_owned(), Direction::Asc));
        self
    }

    #[must_use]
    pub fn order_desc(mut self, column: &str) -> Self {
        self.order.push((column.to_owned(), Direction::Desc));
        self
    }

    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Request path relative to the project URL.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/rest/v1/{}", self.collection)
    }

    /// Query parameters in PostgREST syntax, unencoded.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_owned(), self.columns.clone())];
        pairs.extend(self.filters.iter().cloned());
        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(|(column, dir)| match dir {
                    Direction::Asc => format!("{column}.asc"),
                    Direction::Desc => format!("{column}.desc"),
                })
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("order".to_owned(), order));
        }
        pairs
    }
}
