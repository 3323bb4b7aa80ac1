//! Inline SVG icons.
//!
//! Simple glyphs drawn on a 256x256 grid with `fill-rule="evenodd"`, so
//! inner rectangles and circles punch holes in their outlines.

use crate::types::IconKind;
use leptos::prelude::*;

/// Renders an inline SVG icon.
///
/// # Props
///
/// * `kind` - Which glyph to draw
/// * `size` - Icon size in pixels (default: "24")
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon kind=IconKind::Home size="32" /> }
/// ```
#[component]
pub fn Icon(
    kind: IconKind,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let class = if class.is_empty() {
        "icon".to_string()
    } else {
        format!("icon {class}")
    };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path fill-rule="evenodd" d=icon_path(kind)></path>
        </svg>
    }
}

/// SVG path data for a glyph.
pub fn icon_path(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Home => ICON_HOME,
        IconKind::Calendar => ICON_CALENDAR,
        IconKind::Invoice => ICON_INVOICE,
        IconKind::Tools => ICON_TOOLS,
        IconKind::Chat => ICON_CHAT,
        IconKind::ChartLine => ICON_CHART_LINE,
        IconKind::UserPatient => ICON_USER,
        IconKind::ClipboardCheck => ICON_CLIPBOARD_CHECK,
        IconKind::Book => ICON_BOOK,
        IconKind::Users => ICON_USERS,
        IconKind::Coins => ICON_COINS,
        IconKind::Quote => ICON_QUOTE,
        IconKind::Check => ICON_CHECK,
        IconKind::Cross => ICON_CROSS,
        IconKind::Envelope => ICON_ENVELOPE,
        IconKind::Phone => ICON_PHONE,
        IconKind::MapPin => ICON_MAP_PIN,
        IconKind::Facebook => ICON_FACEBOOK,
        IconKind::Twitter => ICON_TWITTER,
        IconKind::Instagram => ICON_INSTAGRAM,
        IconKind::LinkedIn => ICON_LINKEDIN,
    }
}

const ICON_HOME: &str = "M128,24L240,120H208V232H152V168H104V232H48V120H16Z";

const ICON_CALENDAR: &str =
    "M32,48H224V232H32Z M48,104H208V216H48Z M64,16H96V40H64Z M160,16H192V40H160Z";

const ICON_INVOICE: &str = "M48,16H208V240L176,216L144,240L112,216L80,240L48,216Z \
     M80,64H176V80H80Z M80,112H176V128H80Z M80,160H144V176H80Z";

const ICON_TOOLS: &str = "M176,16A64,64,0,0,0,118,106L24,200L56,232L150,138A64,64,0,0,0,240,80L200,120L160,112L152,72L192,32A64,64,0,0,0,176,16Z";

const ICON_CHAT: &str = "M32,32H224V184H96L48,232V184H32Z M64,80H192V96H64Z M64,120H160V136H64Z";

const ICON_CHART_LINE: &str =
    "M24,24H40V216H232V232H24Z M56,176L112,112L152,144L224,64L236,76L154,168L114,136L68,188Z";

const ICON_USER: &str = "M128,24A56,56,0,1,1,127.9,24Z M128,144C72,144,32,176,24,232H232C224,176,184,144,128,144Z";

const ICON_CLIPBOARD_CHECK: &str = "M48,40H96V24H160V40H208V240H48Z M64,56H192V224H64Z \
     M80,144L96,128L120,152L168,104L184,120L120,184Z";

const ICON_BOOK: &str = "M24,40H104A24,24,0,0,1,128,64V224A24,24,0,0,0,104,200H24Z \
     M232,40H152A24,24,0,0,0,128,64V224A24,24,0,0,1,152,200H232Z";

const ICON_USERS: &str = "M88,40A44,44,0,1,1,87.9,40Z M88,136C48,136,16,160,8,208H168C160,160,128,136,88,136Z \
     M176,48A40,40,0,1,1,175.9,48Z M176,136C168,136,160,137,152,140C172,154,184,176,188,208H248C240,160,212,136,176,136Z";

const ICON_COINS: &str = "M96,40A72,40,0,1,1,95.9,40Z M24,80V136C24,158,56,176,96,176C136,176,168,158,168,136V80C168,102,136,120,96,120C56,120,24,102,24,80Z \
     M184,112A56,32,0,1,1,183.9,112Z M128,176V208C128,226,153,240,184,240C215,240,240,226,240,208V176C240,194,215,208,184,208C153,208,128,194,128,176Z";

const ICON_QUOTE: &str = "M24,88A48,48,0,0,1,72,40H104V72H72A16,16,0,0,0,56,88V104H112V200H24Z \
     M144,88A48,48,0,0,1,192,40H224V72H192A16,16,0,0,0,176,88V104H232V200H144Z";

const ICON_CHECK: &str = "M24,136L48,112L104,168L208,64L232,88L104,216Z";

const ICON_CROSS: &str = "M56,32L128,104L200,32L224,56L152,128L224,200L200,224L128,152L56,224L32,200L104,128L32,56Z";

const ICON_ENVELOPE: &str = "M24,56H232V200H24Z M40,80V184H216V80L128,144Z M48,72L128,128L208,72Z";

const ICON_PHONE: &str = "M64,24L104,64L80,104C96,136,120,160,152,176L192,152L232,192L200,232C112,224,32,144,24,56Z";

const ICON_MAP_PIN: &str = "M128,16A80,80,0,0,0,48,96C48,160,128,240,128,240C128,240,208,160,208,96A80,80,0,0,0,128,16Z \
     M128,64A32,32,0,1,1,127.9,64Z";

const ICON_FACEBOOK: &str = "M144,232V144H176L184,104H144V80C144,68,150,60,164,60H184V24H156C120,24,104,44,104,76V104H72V144H104V232Z";

const ICON_TWITTER: &str = "M32,40H96L136,96L184,40H216L150,116L232,216H168L124,156L72,216H40L110,136Z";

const ICON_INSTAGRAM: &str = "M32,80A48,48,0,0,1,80,32H176A48,48,0,0,1,224,80V176A48,48,0,0,1,176,224H80A48,48,0,0,1,32,176Z \
     M48,80A32,32,0,0,1,80,48H176A32,32,0,0,1,208,80V176A32,32,0,0,1,176,208H80A32,32,0,0,1,48,176Z \
     M128,88A40,40,0,1,1,127.9,88Z M128,104A24,24,0,1,0,128.1,104Z M184,64A12,12,0,1,1,183.9,64Z";

const ICON_LINKEDIN: &str = "M32,96H72V224H32Z M52,32A20,20,0,1,1,51.9,32Z \
     M96,96H136V116C144,102,160,92,180,92C212,92,228,112,228,148V224H188V156C188,140,182,130,168,130C150,130,136,142,136,162V224H96Z";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_path_data() {
        for kind in [
            IconKind::Home,
            IconKind::Calendar,
            IconKind::Invoice,
            IconKind::Tools,
            IconKind::Chat,
            IconKind::ChartLine,
            IconKind::UserPatient,
            IconKind::ClipboardCheck,
            IconKind::Book,
            IconKind::Users,
            IconKind::Coins,
            IconKind::Quote,
            IconKind::Check,
            IconKind::Cross,
            IconKind::Envelope,
            IconKind::Phone,
            IconKind::MapPin,
            IconKind::Facebook,
            IconKind::Twitter,
            IconKind::Instagram,
            IconKind::LinkedIn,
        ] {
            let path = icon_path(kind);
            assert!(path.starts_with('M'), "{kind:?} path must start with a moveto");
            assert!(path.trim_end().ends_with('Z'), "{kind:?} path must be closed");
        }
    }
}
