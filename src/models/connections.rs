use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::OptionsError;

pub const DEFAULT_DB_TYPE: &str = "Sqlite";
pub const DEFAULT_CONNECTION_STRING: &str = "Data Source=WebCodeCli.db";

/// Database engines a connection string can target.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DbType {
    #[default]
    Sqlite,
    #[serde(rename = "PostgreSQL")]
    PostgreSql,
    MySql,
    SqlServer,
}

impl DbType {
    pub const ALL: [DbType; 4] = [
        DbType::Sqlite,
        DbType::PostgreSql,
        DbType::MySql,
        DbType::SqlServer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DbType::Sqlite => "Sqlite",
            DbType::PostgreSql => "PostgreSQL",
            DbType::MySql => "MySql",
            DbType::SqlServer => "SqlServer",
        }
    }
}

impl fmt::Display for DbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DbType {
    type Err = OptionsError;

    /// Matches the canonical names, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        DbType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| OptionsError::InvalidDatabaseKind(s.to_string()))
    }
}

/// Connection settings read by whatever opens the database.
///
/// Both fields are plain strings and are stored exactly as assigned. Call
/// [`ConnectionOptions::validate`] before handing the options to a driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionOptions {
    /// One of `Sqlite`, `PostgreSQL`, `MySql` or `SqlServer`.
    #[serde(rename = "DbType", alias = "db_type")]
    pub db_type: String,
    #[serde(rename = "ConnectionStrings", alias = "connection_string")]
    pub connection_string: String,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            db_type: DEFAULT_DB_TYPE.to_string(),
            connection_string: DEFAULT_CONNECTION_STRING.to_string(),
        }
    }
}

impl ConnectionOptions {
    pub fn new(db_type: impl Into<String>, connection_string: impl Into<String>) -> Self {
        Self {
            db_type: db_type.into(),
            connection_string: connection_string.into(),
        }
    }

    pub fn kind(&self) -> Result<DbType, OptionsError> {
        self.db_type.parse()
    }

    /// Checks both fields and returns the parsed database kind.
    pub fn validate(&self) -> Result<DbType, OptionsError> {
        let kind = self.kind()?;
        if self.connection_string.trim().is_empty() {
            return Err(OptionsError::EmptyConnectionString);
        }
        Ok(kind)
    }
}

// Only the kind; connection strings may carry credentials.
impl fmt::Display for ConnectionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} connection", self.db_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let options = ConnectionOptions::default();
        assert_eq!(options.db_type, "Sqlite");
        assert_eq!(options.connection_string, "Data Source=WebCodeCli.db");
    }

    #[test]
    fn test_fields_are_stored_verbatim() {
        let mut options = ConnectionOptions::default();

        options.db_type = "  not-a-database ".to_string();
        options.connection_string = String::new();

        assert_eq!(options.db_type, "  not-a-database ");
        assert_eq!(options.connection_string, "");
    }

    #[test]
    fn test_switch_to_postgres_keeps_connection_string() {
        let mut options = ConnectionOptions::default();
        options.db_type = "PostgreSQL".to_string();

        assert_eq!(options.db_type, "PostgreSQL");
        assert_eq!(options.connection_string, DEFAULT_CONNECTION_STRING);
        assert_eq!(options.kind().unwrap(), DbType::PostgreSql);
    }

    #[test]
    fn test_parse_db_type() {
        for kind in DbType::ALL {
            assert_eq!(kind.as_str().parse::<DbType>().unwrap(), kind);
            assert_eq!(kind.as_str().to_uppercase().parse::<DbType>().unwrap(), kind);
        }
        assert_eq!(" mysql\n".parse::<DbType>().unwrap(), DbType::MySql);
    }

    #[test]
    fn test_parse_unknown_db_type() {
        let err = "Oracle".parse::<DbType>().unwrap_err();
        assert!(matches!(err, OptionsError::InvalidDatabaseKind(ref kind) if kind == "Oracle"));
        assert!("".parse::<DbType>().is_err());
        assert!("Postgres".parse::<DbType>().is_err());
    }

    #[test]
    fn test_db_type_serde_uses_canonical_names() {
        for kind in DbType::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.as_str());
            assert_eq!(serde_json::from_value::<DbType>(json).unwrap(), kind);
        }
        assert_eq!(
            serde_json::from_str::<DbType>(r#""PostgreSQL""#).unwrap(),
            DbType::PostgreSql
        );
        assert!(serde_json::from_str::<DbType>(r#""PostgreSql""#).is_err());
    }

    #[test]
    fn test_validate() {
        assert_eq!(ConnectionOptions::default().validate().unwrap(), DbType::Sqlite);

        let blank = ConnectionOptions::new("SqlServer", "   ");
        assert!(matches!(
            blank.validate(),
            Err(OptionsError::EmptyConnectionString)
        ));

        let unknown = ConnectionOptions::new("Mongo", "mongodb://localhost");
        assert!(matches!(
            unknown.validate(),
            Err(OptionsError::InvalidDatabaseKind(_))
        ));
    }

    #[test]
    fn test_serde_field_names() {
        let options = ConnectionOptions::new("MySql", "Server=localhost;Database=app");
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["DbType"], "MySql");
        assert_eq!(json["ConnectionStrings"], "Server=localhost;Database=app");

        let parsed: ConnectionOptions =
            serde_json::from_str(r#"{"db_type": "SqlServer"}"#).unwrap();
        assert_eq!(parsed.db_type, "SqlServer");
        assert_eq!(parsed.connection_string, DEFAULT_CONNECTION_STRING);
    }

    #[test]
    fn test_display_hides_connection_string() {
        let options = ConnectionOptions::new("PostgreSQL", "Host=db;Password=hunter2");
        let shown = options.to_string();
        assert_eq!(shown, "PostgreSQL connection");
        assert!(!shown.contains("hunter2"));
    }
}
