use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by provider-issued bearer tokens. Only `sub` is consumed
/// by this service; `exp` is validated during decode.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

/// Verify an HS256 bearer token against the shared secret and return its
/// claims. Pure function of (token, secret, current time); signature and
/// expiry failures both surface as decode errors.
///
/// An empty secret is refused outright: HS256 would otherwise accept any
/// token signed with the empty string, turning a missing JWT_SECRET into an
/// authentication bypass.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    if secret.is_empty() {
        return Err(jsonwebtoken::errors::ErrorKind::InvalidKeyFormat.into());
    }

    let key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let data = decode::<Claims>(token, &key, &validation)?;
    Ok(data.claims)
}
