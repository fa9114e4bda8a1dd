use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SuggestionsQuery {
    /// Region identifier, e.g. `southern`. Unknown identifiers are sent to the
    /// model as-is.
    pub region: Option<String>,
}
