use serde::{Deserialize, Deserializer, Serialize};

/// JWT payload shared by issuer and validator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub email: String,
    /// Comma-separated authority names, e.g. `"ROLE_USER,ROLE_ADMIN"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorities: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "numeric_date"
    )]
    pub iat: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "numeric_date"
    )]
    pub exp: Option<i64>,
}

/// JWT NumericDate: whole seconds, possibly sent as a JSON float.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumericDate {
    Seconds(i64),
    Fractional(f64),
}

fn numeric_date<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<NumericDate>::deserialize(deserializer)?.map(|date| match date {
            NumericDate::Seconds(secs) => secs,
            // Fractional seconds are truncated
            NumericDate::Fractional(secs) => secs as i64,
        }),
    )
}

/// Authenticated caller attached to a request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub authorities: Vec<String>,
}

impl Principal {
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            username: claims.email,
            authorities: parse_authorities(claims.authorities.as_deref().unwrap_or("")),
        }
    }

    pub fn has_authority(&self, name: &str) -> bool {
        self.authorities.iter().any(|a| a == name)
    }
}

/// Split a comma-separated authority list, trimming entries and dropping empties.
pub fn parse_authorities(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_authorities() {
        assert_eq!(
            parse_authorities(" ROLE_USER, ,ROLE_ADMIN ,"),
            vec!["ROLE_USER".to_string(), "ROLE_ADMIN".to_string()]
        );
        assert!(parse_authorities("").is_empty());
        assert!(parse_authorities(" , ").is_empty());
    }

    #[test]
    fn test_principal_from_claims() {
        let principal = Principal::from_claims(Claims {
            email: "alice@example.com".to_string(),
            authorities: Some("ROLE_USER".to_string()),
            iat: None,
            exp: None,
        });
        assert_eq!(principal.username, "alice@example.com");
        assert!(principal.has_authority("ROLE_USER"));
        assert!(!principal.has_authority("ROLE_ADMIN"));
    }

    #[test]
    fn test_numeric_dates() {
        let claims: Claims =
            serde_json::from_str(r#"{"email":"a@example.com","iat":1700000000,"exp":1.7e9}"#)
                .unwrap();
        assert_eq!(claims.iat, Some(1_700_000_000));
        assert_eq!(claims.exp, Some(1_700_000_000));

        let claims: Claims =
            serde_json::from_str(r#"{"email":"a@example.com","exp":1700000000.75}"#).unwrap();
        assert_eq!(claims.exp, Some(1_700_000_000));
        assert_eq!(claims.iat, None);

        let claims: Claims =
            serde_json::from_str(r#"{"email":"a@example.com","exp":null}"#).unwrap();
        assert_eq!(claims.exp, None);

        assert!(serde_json::from_str::<Claims>(r#"{"email":"a@example.com","exp":"soon"}"#)
            .is_err());
    }

    #[test]
    fn test_missing_authorities_claim() {
        let claims: Claims = serde_json::from_str(r#"{"email":"bob@example.com"}"#).unwrap();
        let principal = Principal::from_claims(claims);
        assert!(principal.authorities.is_empty());
    }
}
