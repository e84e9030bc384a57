use utoipa::OpenApi;

use crate::modules::session::controller::ErrorResponse;
use fournil_auth::User;
use fournil_models::{
    ChangePasswordDto, CreateOrderDto, DashboardResponse, GuardResponse, LoginRequest,
    LoginResponse, MessageResponse, NavigationResponse, OrderAcknowledgement, OrderLine,
    PageView, RoleCheckResponse, SessionResponse,
};
use fournil_views::{DashboardModule, LandingTarget, NavEntry};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::session::controller::login,
        crate::modules::session::controller::logout,
        crate::modules::session::controller::get_session,
        crate::modules::session::controller::check_role,
        crate::modules::views::controller::get_navigation,
        crate::modules::views::controller::get_dashboard,
        crate::modules::views::controller::check_guard,
        crate::modules::pages::controller::render_page,
        crate::modules::pages::controller::submit_order,
        crate::modules::pages::controller::change_password,
    ),
    components(
        schemas(
            User,
            LoginRequest,
            LoginResponse,
            LandingTarget,
            SessionResponse,
            RoleCheckResponse,
            GuardResponse,
            NavEntry,
            DashboardModule,
            NavigationResponse,
            DashboardResponse,
            PageView,
            OrderLine,
            CreateOrderDto,
            OrderAcknowledgement,
            ChangePasswordDto,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Session", description = "In-memory operator session"),
        (name = "Views", description = "Role-scoped navigation and dashboards"),
        (name = "Pages", description = "Guarded back office pages and forms")
    ),
    info(
        title = "Fournil Back Office",
        version = "0.1.0",
        description = "Role-scoped back office for bakers, sales, supply, preparation and maintenance"
    )
)]
pub struct ApiDoc;
