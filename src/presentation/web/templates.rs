// src/presentation/web/templates.rs
use minijinja::{Environment, Value};
use std::sync::LazyLock;

macro_rules! page_sources {
    ($($name:literal),* $(,)?) => {
        &[$(($name, include_str!(concat!("../../../templates/", $name)))),*]
    };
}

const SOURCES: &[(&str, &str)] = page_sources![
    "base.html",
    "home.html",
    "login.html",
    "register.html",
    "dashboard.html",
    "article_list.html",
    "article_detail.html",
    "article_form.html",
    "article_confirm_delete.html",
    "article_confirm_approve.html",
    "newsletter_list.html",
    "newsletter_detail.html",
    "newsletter_form.html",
    "newsletter_confirm_delete.html",
    "subscriptions.html",
    "publisher_list.html",
    "publisher_form.html",
    "publisher_confirm.html",
    "error.html",
];

static TEMPLATES: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    for &(name, source) in SOURCES {
        if let Err(err) = env.add_template(name, source) {
            tracing::error!(template = name, error = %err, "template failed to compile");
        }
    }
    env
});

pub fn render(name: &str, ctx: Value) -> Result<String, minijinja::Error> {
    TEMPLATES.get_template(name)?.render(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn every_page_compiles() {
        for (name, _) in SOURCES {
            assert!(TEMPLATES.get_template(name).is_ok(), "{name} did not compile");
        }
    }

    #[test]
    fn output_is_html_escaped() {
        let html = render(
            "error.html",
            context! {
                site_name => "NewsApp",
                page => context! { status => 404, message => "<script>x</script>" },
            },
        )
        .unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>x"));
    }

    #[test]
    fn flash_is_rendered_in_the_layout() {
        let html = render(
            "home.html",
            context! {
                site_name => "NewsApp",
                flash => context! { level => "info", message => "You have been logged out" },
                page => context! {},
            },
        )
        .unwrap();
        assert!(html.contains("You have been logged out"));
        assert!(html.contains("flash-info"));
    }
}
