use axum::response::Html;

static HOME_HTML: &str = include_str!("../web/home.html");
static SERVICES_HTML: &str = include_str!("../web/services.html");
static BOOKING_HTML: &str = include_str!("../web/booking.html");
static CONTACT_HTML: &str = include_str!("../web/contact.html");
static PRIVACY_HTML: &str = include_str!("../web/privacy.html");
static TERMS_HTML: &str = include_str!("../web/terms.html");

pub async fn home_page() -> Html<&'static str> {
    Html(HOME_HTML)
}

pub async fn services_page() -> Html<&'static str> {
    Html(SERVICES_HTML)
}

pub async fn booking_page() -> Html<&'static str> {
    Html(BOOKING_HTML)
}

pub async fn contact_page() -> Html<&'static str> {
    Html(CONTACT_HTML)
}

pub async fn privacy_page() -> Html<&'static str> {
    Html(PRIVACY_HTML)
}

pub async fn terms_page() -> Html<&'static str> {
    Html(TERMS_HTML)
}
