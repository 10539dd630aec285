use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::accounts::model::{Account, AccountRole, AccountStats};
use crate::modules::auth::model::{LoginRequest, LoginResponse, ProfileResponse};
use crate::modules::questions::model::{AttemptResult, QuestionResponse, SubmitAttemptDto};
use crate::utils::errors::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::profile,
        crate::modules::questions::controller::get_questions,
        crate::modules::questions::controller::get_question,
        crate::modules::questions::controller::submit_attempt,
        crate::modules::accounts::controller::get_accounts,
        crate::modules::accounts::controller::ban_account,
        crate::modules::accounts::controller::unban_account,
        crate::modules::accounts::controller::account_stats,
    ),
    components(
        schemas(
            Account,
            AccountRole,
            AccountStats,
            LoginRequest,
            LoginResponse,
            ProfileResponse,
            QuestionResponse,
            SubmitAttemptDto,
            AttemptResult,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and identity endpoints"),
        (name = "Questions", description = "Question catalogue and answer attempts"),
        (name = "Accounts", description = "Administrative account management")
    ),
    info(
        title = "Quizbank API",
        version = "0.1.0",
        description = "A question bank REST API built with Rust, Axum and PostgreSQL featuring JWT-based authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
