//! Route table and OpenAPI document assembly.

use axum::{routing::get, Router};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin, audit, auth, billing, chat, customer, egg_production, expense, feed_usage, flock,
        house, inventory, production_record, sale,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Farmboard API",
        description = "Multi-tenant poultry farm management backend"
    ),
    modifiers(&BearerAuth)
)]
struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::verify_otp))
        .routes(routes!(auth::refresh))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_me))
        .routes(routes!(auth::set_two_factor))
        .routes(routes!(admin::get_users, admin::create_staff))
        .routes(routes!(admin::update_role))
        .routes(routes!(admin::delete_user))
        .routes(routes!(flock::get_flocks, flock::create_flock))
        .routes(routes!(
            flock::get_flock,
            flock::update_flock,
            flock::delete_flock
        ))
        .routes(routes!(flock::get_flock_summary))
        .routes(routes!(house::get_houses, house::create_house))
        .routes(routes!(
            house::get_house,
            house::update_house,
            house::delete_house
        ))
        .routes(routes!(
            egg_production::get_entries,
            egg_production::create_entry
        ))
        .routes(routes!(
            egg_production::get_entry,
            egg_production::update_entry,
            egg_production::delete_entry
        ))
        .routes(routes!(feed_usage::get_entries, feed_usage::create_entry))
        .routes(routes!(
            feed_usage::get_entry,
            feed_usage::update_entry,
            feed_usage::delete_entry
        ))
        .routes(routes!(expense::get_expenses, expense::create_expense))
        .routes(routes!(
            expense::get_expense,
            expense::update_expense,
            expense::delete_expense
        ))
        .routes(routes!(sale::get_sales, sale::create_sale))
        .routes(routes!(sale::get_sale, sale::update_sale, sale::delete_sale))
        .routes(routes!(customer::get_customers, customer::create_customer))
        .routes(routes!(
            customer::get_customer,
            customer::update_customer,
            customer::delete_customer
        ))
        .routes(routes!(inventory::get_items, inventory::create_item))
        .routes(routes!(
            inventory::get_item,
            inventory::update_item,
            inventory::delete_item
        ))
        .routes(routes!(
            inventory::get_transactions,
            inventory::create_transaction
        ))
        .routes(routes!(
            production_record::get_records,
            production_record::create_record
        ))
        .routes(routes!(
            production_record::get_record,
            production_record::update_record,
            production_record::delete_record
        ))
        .routes(routes!(audit::get_audit_log))
        .routes(routes!(billing::checkout))
        .routes(routes!(billing::get_subscription))
        .routes(routes!(billing::webhook))
        .routes(routes!(chat::get_threads, chat::create_thread))
        .routes(routes!(chat::add_participant))
        .routes(routes!(chat::get_messages, chat::send_message))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        // Websocket upgrades are not part of the OpenAPI document.
        .route("/api/chat/ws", get(chat::chat_ws))
}
