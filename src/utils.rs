use axum::response::Html;
use tera::{Context, Tera};

pub fn render_template(tera: &Tera, template_name: &str, context: Context) -> Html<String> {
    Html(tera.render(template_name, &context).unwrap_or_else(|err| {
        tracing::error!(%err, template_name, "template rendering failed");
        format!("Error rendering template: {}", template_name)
    }))
}
