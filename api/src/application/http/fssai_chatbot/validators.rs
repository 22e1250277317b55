use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::non_blank;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct FssaiQueryValidator {
    #[validate(
        custom(function = "non_blank", message = "Please enter a question."),
        length(max = 2000, message = "query must be at most 2000 characters")
    )]
    pub query: String,
}
