//! The bundled Tramando user manual, one module per language.
//!
//! Both editions share chapter order, image placement and table shapes; only the text
//! differs.  Prose may use the inline markup of [`crate::richtext`], table cells and code
//! blocks are literal.

mod english;
mod italian;

use crate::model::{DocumentPlan, FrontMatter, ImageRef, Language};

/// Width of in-chapter screenshots without a layout-specific width.
pub const IMAGE_WIDTH_MM: f64 = 140.0;
const COVER_IMAGE_WIDTH_MM: f64 = 120.0;

const COVER_IMAGE: &str = "splash.png";

/// The bundled manual for `language`.
pub fn plan_for(language: Language) -> DocumentPlan {
    match language {
        Language::Italian => italian::plan(),
        Language::English => english::plan(),
    }
}

fn front_matter(tagline: &str, subtitle: &str, version: &str, toc_title: &str) -> FrontMatter {
    FrontMatter::new("Tramando", tagline, subtitle, version, toc_title)
        .with_cover_image(ImageRef::new(COVER_IMAGE, COVER_IMAGE_WIDTH_MM))
}

fn screenshot(file: &str, width_mm: f64, caption: &str) -> ImageRef {
    ImageRef::new(file, width_mm).with_caption(caption)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentBlock;
    use crate::richtext::parse_markup;

    fn prose(block: &ContentBlock) -> Vec<&str> {
        match block {
            ContentBlock::Heading { text, .. }
            | ContentBlock::Paragraph(text)
            | ContentBlock::Note(text)
            | ContentBlock::Caption(text) => vec![text.as_str()],
            ContentBlock::BulletList(items) | ContentBlock::NumberedList(items) => {
                items.iter().map(String::as_str).collect()
            }
            _ => Vec::new(),
        }
    }

    #[test]
    fn both_editions_have_fifteen_chapters() {
        for language in Language::ALL {
            let plan = plan_for(language);
            assert_eq!(plan.language(), language);
            assert_eq!(plan.chapters().len(), 15);
            assert_eq!(plan.table_of_contents().len(), 15);
        }
    }

    #[test]
    fn file_names_differ_per_language() {
        assert_eq!(
            plan_for(Language::Italian).file_name(),
            "Tramando_Manuale_Italiano.pdf"
        );
        assert_eq!(
            plan_for(Language::English).file_name(),
            "Tramando_Manual_English.pdf"
        );
    }

    #[test]
    fn editions_are_structurally_parallel() {
        let italian = plan_for(Language::Italian);
        let english = plan_for(Language::English);
        for (it, en) in italian.chapters().iter().zip(english.chapters()) {
            assert_eq!(it.identifier(), en.identifier());
            assert_eq!(it.blocks().len(), en.blocks().len(), "{}", it.identifier());
        }
    }

    #[test]
    fn every_table_is_well_formed() {
        for language in Language::ALL {
            for chapter in plan_for(language).chapters() {
                for block in chapter.blocks() {
                    if let ContentBlock::Table(table) = block {
                        assert_eq!(table.validate(), Ok(()), "{}", chapter.identifier());
                    }
                }
            }
        }
    }

    #[test]
    fn prose_markup_is_well_formed() {
        for language in Language::ALL {
            for chapter in plan_for(language).chapters() {
                for block in chapter.blocks() {
                    for text in prose(block) {
                        assert!(parse_markup(text).is_ok(), "{text}");
                    }
                }
            }
        }
    }
}
