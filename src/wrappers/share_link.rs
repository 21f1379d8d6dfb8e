use crate::errors::TokenError;
use crate::input::Household;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Packs a household into a token that can be carried in a URL query string.
pub fn encode_household(household: &Household) -> String {
    // a Household always has a JSON representation
    URL_SAFE_NO_PAD.encode(serde_json::to_vec(household).unwrap())
}

pub fn decode_household(token: &str) -> Result<Household, TokenError> {
    let json = URL_SAFE_NO_PAD.decode(token)?;
    Ok(serde_json::from_slice(&json)?)
}
