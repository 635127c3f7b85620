// src/resume.rs
//
// Extracts the key fields of a hh.ru resume page into a Markdown summary.
// Resumes carry more optional sections than vacancies: work experience,
// key skills and education are all best-effort.

use scraper::{ElementRef, Html, Selector};

use crate::error::Result;
use crate::select::{first_text, flat_text, selector, tag_texts};

const NOT_FOUND: &str = "Не найдено";

const NAME: &str = r#"h2[data-qa="bloko-header-1"]"#;
// The demographic line (gender, age, birth date) carries no marker on the
// site; the first paragraph of the page is the best available heuristic.
const DEMOGRAPHICS: &str = "p";
const ADDRESS: &str = r#"span[data-qa="resume-personal-address"]"#;
const DESIRED_POSITION: &str = r#"span[data-qa="resume-block-title-position"]"#;
const SEARCH_STATUS: &str = r#"span[data-qa="job-search-status"]"#;

const EXPERIENCE_SECTION: &str = r#"div[data-qa="resume-block-experience"]"#;
const EXPERIENCE_ITEM: &str = "div.resume-block-item-gap";
const EXPERIENCE_PERIOD: &str = "div.bloko-column_s-2";
const EXPERIENCE_DURATION: &str = "div.bloko-text";
const EXPERIENCE_COMPANY: &str = "div.bloko-text_strong";
const EXPERIENCE_POSITION: &str = r#"div[data-qa="resume-block-experience-position"]"#;
const EXPERIENCE_DESCRIPTION: &str = r#"div[data-qa="resume-block-experience-description"]"#;

const SKILLS_SECTION: &str = r#"div[data-qa="skills-table"]"#;
const SKILL_TAG: &str = r#"span[data-qa="bloko-tag__text"]"#;

const EDUCATION_SECTION: &str = r#"div[data-qa="resume-block-education"]"#;
const EDUCATION_ITEM: &str = "div.resume-block-item-gap";

/// Locators for the sub-fields of one work-experience block.
struct ExperienceLocators {
    period: Selector,
    duration: Selector,
    company: Selector,
    position: Selector,
    description: Selector,
}

impl ExperienceLocators {
    fn new() -> Result<Self> {
        Ok(Self {
            period: selector(EXPERIENCE_PERIOD)?,
            duration: selector(EXPERIENCE_DURATION)?,
            company: selector(EXPERIENCE_COMPANY)?,
            position: selector(EXPERIENCE_POSITION)?,
            description: selector(EXPERIENCE_DESCRIPTION)?,
        })
    }
}

/// Builds the Markdown block for one work-experience item.
///
/// Each sub-field falls back to its own placeholder, so a record missing
/// any number of markers is still emitted; an entirely empty block becomes
/// an all-placeholder record rather than being dropped.
fn experience_entry(item: ElementRef, locators: &ExperienceLocators) -> String {
    let mut period =
        first_text(item, &locators.period).unwrap_or_else(|| "Период не указан".to_string());

    // The total duration is rendered inside the period column; set it off
    // in parentheses instead of leaving it glued to the date range.
    if let Some(duration) = first_text(item, &locators.duration) {
        period = period.replace(&duration, &format!(" ({duration})"));
    }

    let company =
        first_text(item, &locators.company).unwrap_or_else(|| "Компания не указана".to_string());
    let position =
        first_text(item, &locators.position).unwrap_or_else(|| "Должность не указана".to_string());
    let description = first_text(item, &locators.description)
        .unwrap_or_else(|| "Описание отсутствует".to_string());

    format!("**{period}**\n\n*{company}*\n\n**{position}**\n\n{description}\n")
}

/// Extracts resume data from HTML and formats it as Markdown.
///
/// Scalar fields default to a placeholder when absent. The work-experience
/// and skills sections always print a heading, with a fixed sentence when
/// empty; the education section is appended only when it has entries.
pub fn extract_resume_data(html: &str) -> Result<String> {
    let doc = Html::parse_document(html);
    let root = doc.root_element();

    let name = first_text(root, &selector(NAME)?).unwrap_or_else(|| NOT_FOUND.to_string());
    let demographics =
        first_text(root, &selector(DEMOGRAPHICS)?).unwrap_or_else(|| NOT_FOUND.to_string());
    let location = first_text(root, &selector(ADDRESS)?).unwrap_or_else(|| NOT_FOUND.to_string());
    let desired_position =
        first_text(root, &selector(DESIRED_POSITION)?).unwrap_or_else(|| NOT_FOUND.to_string());
    let status =
        first_text(root, &selector(SEARCH_STATUS)?).unwrap_or_else(|| NOT_FOUND.to_string());

    // Work experience: one record per repeated item block.
    let experiences: Vec<String> = match root.select(&selector(EXPERIENCE_SECTION)?).next() {
        Some(section) => {
            let item_sel = selector(EXPERIENCE_ITEM)?;
            let locators = ExperienceLocators::new()?;
            section
                .select(&item_sel)
                .map(|item| experience_entry(item, &locators))
                .collect()
        }
        None => Vec::new(),
    };

    let skills = tag_texts(root, &selector(SKILLS_SECTION)?, &selector(SKILL_TAG)?);

    // Education: flattened text per item, empty items skipped.
    let mut education = Vec::new();
    if let Some(section) = root.select(&selector(EDUCATION_SECTION)?).next() {
        let item_sel = selector(EDUCATION_ITEM)?;
        for item in section.select(&item_sel) {
            let entry = flat_text(item);
            if !entry.is_empty() {
                education.push(entry);
            }
        }
    }

    // Assemble the Markdown document.
    let mut markdown = format!("# {name}\n\n");
    markdown.push_str(&format!("**{demographics}**\n\n"));
    markdown.push_str(&format!("**Местоположение:** {location}\n\n"));
    markdown.push_str(&format!("**Желаемая должность:** {desired_position}\n\n"));
    markdown.push_str(&format!("**Статус:** {status}\n\n"));

    markdown.push_str("## Опыт работы\n\n");
    if experiences.is_empty() {
        markdown.push_str("Опыт работы не найден.\n");
    } else {
        markdown.push_str(&experiences.join("\n---\n"));
    }

    markdown.push_str("\n## Ключевые навыки\n\n");
    if skills.is_empty() {
        markdown.push_str("Навыки не указаны.");
    } else {
        markdown.push_str(&skills.join(", "));
    }

    if !education.is_empty() {
        markdown.push_str("\n\n## Образование\n\n");
        markdown.push_str(&education.join("\n"));
    }

    Ok(markdown.trim().to_string())
}
