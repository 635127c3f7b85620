// src/vacancy.rs
//
// Extracts the key fields of a hh.ru vacancy page into a Markdown summary.

use scraper::Html;

use crate::error::Result;
use crate::select::{first_text, selector, tag_texts, text_lines};

/// Placeholder for a field whose marker is absent from the page.
const NOT_FOUND: &str = "Не найдено";
const DESCRIPTION_NOT_FOUND: &str = "Описание не найдено";

// One named locator per field, so a site markup change touches a single
// constant rather than the extraction logic.
const TITLE: &str = r#"h1[data-qa="vacancy-title"]"#;
const SALARY: &str = r#"span[data-qa="vacancy-salary-compensation-type-net"]"#;
// Some vacancy types expose the salary under a different marker.
const SALARY_FALLBACK: &str = r#"span[data-qa="vacancy-salary"]"#;
const COMPANY: &str = r#"a[data-qa="vacancy-company-name"]"#;
const DESCRIPTION: &str = r#"div[data-qa="vacancy-description"]"#;
const SKILLS_SECTION: &str = r#"div[data-qa="skills-element"]"#;
const SKILL_TAG: &str = r#"span[data-qa="bloko-tag__text"]"#;

/// Extracts vacancy data from HTML and formats it as Markdown.
///
/// Every field falls back to a placeholder when its marker is missing, so
/// a partially recognized page still yields a complete document. The skills
/// line is emitted only when at least one skill tag is present.
pub fn extract_vacancy_data(html: &str) -> Result<String> {
    let doc = Html::parse_document(html);
    let root = doc.root_element();

    let title = first_text(root, &selector(TITLE)?).unwrap_or_else(|| NOT_FOUND.to_string());

    // Two-tier salary lookup: the structure differs between vacancy types.
    let salary_fallback = selector(SALARY_FALLBACK)?;
    let salary = first_text(root, &selector(SALARY)?)
        .or_else(|| first_text(root, &salary_fallback))
        .unwrap_or_else(|| NOT_FOUND.to_string());

    let company = first_text(root, &selector(COMPANY)?).unwrap_or_else(|| NOT_FOUND.to_string());

    // Keep line breaks between the description's sub-elements.
    let description = root
        .select(&selector(DESCRIPTION)?)
        .next()
        .map(text_lines)
        .unwrap_or_else(|| DESCRIPTION_NOT_FOUND.to_string());

    let skills = tag_texts(root, &selector(SKILLS_SECTION)?, &selector(SKILL_TAG)?);

    // Assemble the Markdown document.
    let mut markdown = format!("# {title}\n\n");
    markdown.push_str(&format!("**Компания:** {company}\n\n"));
    markdown.push_str(&format!("**Зарплата:** {salary}\n\n"));

    if !skills.is_empty() {
        markdown.push_str(&format!("**Ключевые навыки:** {}\n\n", skills.join(", ")));
    }

    markdown.push_str(&format!("## Описание\n\n{description}"));

    Ok(markdown.trim().to_string())
}
