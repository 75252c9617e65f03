//! HTML rendering of the list view.
//!
//! Markup mirrors the widget's DOM structure. Every interactive control
//! carries `data-action` and the owning card carries `data-extension-id`, so a
//! host needs only one delegated listener on the container.

use crate::model::filter::FilterMode;
use crate::model::theme::{Theme, ThemeButtons};
use crate::view::list_view::{ExtensionCard, ExtensionListView};

pub const CONTAINER_CLASS: &str = "extensions-list__container";
pub const ITEM_CLASS: &str = "extensions-list__item";
pub const ACTION_TOGGLE: &str = "toggle";
pub const ACTION_REMOVE: &str = "remove";

const LEAVING_STYLE: &str =
    "transition: opacity 0.3s ease, transform 0.3s ease; opacity: 0; transform: translateX(-100%);";

/// Escapes text for element content and double-quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Renders one card as an `<article>` element.
pub fn card_html(card: &ExtensionCard) -> String {
    let style = if card.is_leaving() {
        format!(" style=\"{LEAVING_STYLE}\"")
    } else {
        String::new()
    };
    let checked = if card.checked { " checked" } else { "" };

    format!(
        concat!(
            "<article class=\"{item}\" data-extension-id=\"{id}\"{style}>",
            "<div class=\"{item}-content\">",
            "<img src=\"{logo}\" class=\"{item}-image\" width=\"60\" height=\"60\" alt=\"\">",
            "<div class=\"{item}-details\"><h2>{name}</h2><p>{description}</p></div>",
            "</div>",
            "<div class=\"{item}-actions\">",
            "<button class=\"btn\" type=\"button\" data-action=\"{remove}\">Remove</button>",
            "<label class=\"switch\">",
            "<input type=\"checkbox\" data-action=\"{toggle}\"{checked} />",
            "<span class=\"slider\"></span>",
            "</label>",
            "</div>",
            "</article>"
        ),
        item = ITEM_CLASS,
        id = card.id,
        style = style,
        logo = escape_html(&card.logo),
        name = escape_html(&card.name),
        description = escape_html(&card.description),
        remove = ACTION_REMOVE,
        toggle = ACTION_TOGGLE,
        checked = checked,
    )
}

/// Renders the list container with every attached card.
///
/// An unrendered view yields an empty container.
pub fn list_html(view: &ExtensionListView) -> String {
    let mut html = format!("<div class=\"{CONTAINER_CLASS}\">");
    for card in view.cards() {
        html.push_str(&card_html(card));
    }
    html.push_str("</div>");
    html
}

/// Renders the filter buttons, marking `current` as active.
pub fn filter_bar_html(current: FilterMode) -> String {
    let mut html = String::from("<div class=\"extensions-list__filter-buttons\">");
    for mode in FilterMode::ALL {
        let class = if mode == current { "btn active" } else { "btn" };
        let label = match mode {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Inactive => "Inactive",
        };
        html.push_str(&format!(
            "<button class=\"{class}\" type=\"button\" data-filter=\"{}\">{label}</button>",
            mode.as_str()
        ));
    }
    html.push_str("</div>");
    html
}

/// Renders the two theme switch buttons with their visibility.
pub fn theme_buttons_html(theme: Theme) -> String {
    let buttons = ThemeButtons::for_theme(theme);
    let hidden = |is_hidden: bool| if is_hidden { " hidden" } else { "" };
    format!(
        concat!(
            "<button id=\"btnLight\" class=\"theme-btn{}\" type=\"button\" data-theme=\"light\">Light</button>",
            "<button id=\"btnDark\" class=\"theme-btn{}\" type=\"button\" data-theme=\"dark\">Dark</button>"
        ),
        hidden(buttons.light_hidden),
        hidden(buttons.dark_hidden)
    )
}

#[cfg(test)]
mod tests {
    use super::{card_html, escape_html, filter_bar_html, theme_buttons_html};
    use crate::model::filter::FilterMode;
    use crate::model::theme::Theme;
    use crate::view::list_view::{CardPhase, ExtensionCard};
    use uuid::Uuid;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn card_markup_is_complete_for_visible_card() {
        let card = ExtensionCard {
            id: Uuid::nil(),
            name: "DevLens".to_string(),
            description: "Inspect".to_string(),
            logo: "./logo.svg".to_string(),
            checked: true,
            phase: CardPhase::Visible,
        };
        let html = card_html(&card);

        assert!(html.starts_with(
            r#"<article class="extensions-list__item" data-extension-id="00000000-0000-0000-0000-000000000000">"#
        ));
        assert!(html.contains(r#"<input type="checkbox" data-action="toggle" checked />"#));
        assert!(html.contains(r#"data-action="remove">Remove</button>"#));
        assert!(!html.contains("style="));
        assert!(html.ends_with("</article>"));
    }

    #[test]
    fn filter_bar_marks_current_mode() {
        let html = filter_bar_html(FilterMode::Inactive);
        assert!(html.contains(r#"<button class="btn active" type="button" data-filter="inactive">"#));
        assert_eq!(html.matches("btn active").count(), 1);
    }

    #[test]
    fn dark_theme_hides_dark_button() {
        let html = theme_buttons_html(Theme::Dark);
        assert!(html.contains(r#"id="btnDark" class="theme-btn hidden""#));
        assert!(html.contains(r#"id="btnLight" class="theme-btn""#));
    }
}
