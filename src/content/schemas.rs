//! Portfolio site collections and their reusable sub-schemas.
//!
//! | Collection | Kind | Source                       |
//! |------------|------|------------------------------|
//! | `index`    | page | `index.yml`                  |
//! | `projects` | data | `projects/*.yml`             |
//! | `blog`     | page | `blog/*.md`                  |
//! | `pages`    | page | `projects.yml`, `blog.yml`   |
//! | `speaking` | page | `speaking.yml`               |
//! | `about`    | page | `about.yml`                  |

use super::collection::{Collection, CollectionKind, Source};
use crate::schema::{Editor, Schema, array, date, literal, number, object, string};

pub const BUTTON_COLORS: &[&str] = &["primary", "neutral", "success", "warning", "error", "info"];
pub const BUTTON_SIZES: &[&str] = &["xs", "sm", "md", "lg", "xl"];
pub const BUTTON_VARIANTS: &[&str] = &["solid", "outline", "subtle", "soft", "ghost", "link"];
pub const LINK_TARGETS: &[&str] = &["_blank", "_self"];
pub const EVENT_CATEGORIES: &[&str] = &["Live talk", "Podcast", "Conference"];

// ============================================================================
// sub-schemas
// ============================================================================

/// `title` + `description`, extended by home page sections.
pub fn base() -> Schema {
    object([("title", string()), ("description", string())])
}

pub fn button() -> Schema {
    object([
        ("label", string()),
        ("icon", string().optional()),
        ("to", string().optional()),
        ("color", literal(BUTTON_COLORS).optional()),
        ("size", literal(BUTTON_SIZES).optional()),
        ("variant", literal(BUTTON_VARIANTS).optional()),
        ("target", literal(LINK_TARGETS).optional()),
    ])
}

pub fn image() -> Schema {
    object([
        ("src", string().editor(Editor::Media)),
        ("alt", string()),
        ("srcset", string().optional()),
    ])
}

/// Avatar: a bare image source with an optional srcset.
fn avatar() -> Schema {
    object([("src", string()), ("srcset", string().optional())])
}

pub fn author() -> Schema {
    object([
        ("name", string()),
        ("description", string().optional()),
        ("username", string().optional()),
        ("twitter", string().optional()),
        ("to", string().optional()),
        ("avatar", avatar().optional()),
    ])
}

pub fn testimonial() -> Schema {
    object([("quote", string()), ("author", author())])
}

// ============================================================================
// collection schemas
// ============================================================================

fn index() -> Schema {
    object([
        (
            "hero",
            object([("links", array(button())), ("images", array(image()))]),
        ),
        (
            "howItWorks",
            base().extend([(
                "steps",
                array(object([
                    ("title", string()),
                    ("description", string()),
                    ("icon", string()),
                ])),
            )]),
        ),
        (
            "teachers",
            base().extend([(
                "mentors",
                array(object([
                    ("name", string()),
                    ("role", string()),
                    ("description", string()),
                    ("avatar", avatar()),
                    ("specialties", array(string())),
                ])),
            )]),
        ),
        ("testimonials", array(testimonial())),
        (
            "faq",
            base().extend([(
                "categories",
                array(object([
                    ("title", string()),
                    (
                        "questions",
                        array(object([("label", string()), ("content", string())])),
                    ),
                ])),
            )]),
        ),
        ("cta", base().extend([("links", array(button()))])),
    ])
}

fn projects() -> Schema {
    object([
        ("title", string().nonempty()),
        ("description", string().nonempty()),
        ("image", string().nonempty().editor(Editor::Media)),
        ("url", string().nonempty()),
        ("tags", array(string())),
        ("date", date()),
    ])
}

fn blog() -> Schema {
    object([
        ("minRead", number()),
        ("date", date()),
        ("image", string().nonempty().editor(Editor::Media)),
        ("author", author()),
    ])
}

/// Shared by `projects.yml` and `blog.yml`.
fn pages() -> Schema {
    object([("links", array(button()))])
}

fn speaking() -> Schema {
    object([
        ("links", array(button())),
        (
            "events",
            array(object([
                ("category", literal(EVENT_CATEGORIES)),
                ("title", string()),
                ("date", date()),
                ("location", string()),
                ("url", string().optional()),
            ])),
        ),
    ])
}

fn about() -> Schema {
    object([("content", object([])), ("images", array(image()))])
}

/// The site's collections in classification order.
pub fn collections() -> Vec<Collection> {
    use CollectionKind::{Data, Page};

    vec![
        Collection::new("index", Page, Source::new("index.yml"), index()),
        Collection::new("projects", Data, Source::new("projects/*.yml"), projects()),
        Collection::new("blog", Page, Source::new("blog/*.md"), blog()),
        Collection::new(
            "pages",
            Page,
            Source::include(&["projects.yml", "blog.yml"]),
            pages(),
        ),
        Collection::new("speaking", Page, Source::new("speaking.yml"), speaking()),
        Collection::new("about", Page, Source::new("about.yml"), about()),
    ]
}
