//! Document header.

use super::context::RenderContext;
use crate::config::HeaderStyle;
use crate::error::{PropgenError, Result};
use serde::Serialize;
use serde_json::Value;

/// Subtitle line joins subtitle and school year with this label.
const SCHOOL_YEAR_LABEL: &str = "Anno educativo";

/// Settings for the Pandoc metadata block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PandocOptions {
    /// LaTeX package loaded through `header-includes`.
    pub latex_style: String,
}

#[derive(Serialize)]
struct PandocMetadata {
    title: String,
    subtitle: String,
    documentclass: &'static str,
    author: Vec<PandocAuthor>,
    #[serde(rename = "header-includes")]
    header_includes: Vec<String>,
}

#[derive(Serialize)]
struct PandocAuthor {
    name: String,
    affiliation: String,
}

/// Render the header that opens the document.
pub fn render_header(
    style: HeaderStyle,
    context: &RenderContext,
    pandoc: &PandocOptions,
) -> Result<String> {
    let title = context.require_text("progetto.titolo")?;
    let subtitle = context.require_text("progetto.sottotitolo")?;
    let school_year = context.require_text("progetto.anno_scolastico")?;

    match style {
        HeaderStyle::Markdown => Ok(format!(
            "# {}\n### {} - {} {}\n\n",
            title, subtitle, SCHOOL_YEAR_LABEL, school_year
        )),
        HeaderStyle::Pandoc => {
            pandoc_header(title, format!("{} - {}", subtitle, school_year), context, pandoc)
        }
    }
}

fn pandoc_header(
    title: String,
    subtitle: String,
    context: &RenderContext,
    pandoc: &PandocOptions,
) -> Result<String> {
    let mut header_includes = Vec::new();
    if let Some(group) = context.lookup("progetto.gruppo").and_then(Value::as_str) {
        header_includes.push(format!("\\newcommand{{\\gruppo}}{{{}}}", group));
    }
    header_includes.push(format!("\\usepackage{{{}}}", pandoc.latex_style));

    let metadata = PandocMetadata {
        title,
        subtitle,
        documentclass: "article",
        author: authors(context),
        header_includes,
    };

    let yaml = serde_yaml::to_string(&metadata)
        .map_err(|e| PropgenError::Config(format!("cannot write Pandoc metadata: {}", e)))?;

    Ok(format!("---\n{}---\n\n", yaml))
}

/// `maestri[].nome` / `maestri[].qualifica`; entries without a name are skipped.
fn authors(context: &RenderContext) -> Vec<PandocAuthor> {
    let Some(teachers) = context.lookup("maestri").and_then(Value::as_array) else {
        return Vec::new();
    };

    teachers
        .iter()
        .filter_map(|teacher| {
            let name = teacher.get("nome")?.as_str()?.to_string();
            let affiliation = teacher
                .get("qualifica")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            Some(PandocAuthor { name, affiliation })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::costs::compute_costs;
    use crate::render::build_context;
    use crate::schedule::compute_schedule;
    use crate::test_support::{SAMPLE_CONFIG, sample_config};

    fn pandoc_options() -> PandocOptions {
        PandocOptions {
            latex_style: "styles/mystyle".to_string(),
        }
    }

    fn context_from(raw: &Value) -> RenderContext {
        let config = sample_config();
        let schedule = compute_schedule(&config.schedule_config()).unwrap();
        let cost = compute_costs(&config.cost_config());
        build_context(raw, schedule, cost).unwrap()
    }

    #[test]
    fn test_markdown_header() {
        let context = context_from(sample_config().raw());
        let header = render_header(HeaderStyle::Markdown, &context, &pandoc_options()).unwrap();
        assert_eq!(
            header,
            "# Laboratorio di musica\n### Progetto per la scuola dell'infanzia - Anno educativo 2024/2025\n\n"
        );
    }

    fn pandoc_metadata(header: &str) -> serde_yaml::Value {
        let body = header
            .strip_prefix("---\n")
            .and_then(|rest| rest.strip_suffix("---\n\n"))
            .unwrap();
        serde_yaml::from_str(body).unwrap()
    }

    #[test]
    fn test_numeric_school_year() {
        let yaml = SAMPLE_CONFIG.replace("anno_scolastico: 2024/2025", "anno_scolastico: 2025");
        let config = Config::from_yaml(&yaml).unwrap();
        let context = context_from(config.raw());

        let header = render_header(HeaderStyle::Markdown, &context, &pandoc_options()).unwrap();
        assert!(header.ends_with("Anno educativo 2025\n\n"));
    }

    #[test]
    fn test_teacher_without_name_is_skipped() {
        let yaml = SAMPLE_CONFIG.replace("  - nome: Anna Rossi\n", "  - ruolo: supplente\n");
        let config = Config::from_yaml(&yaml).unwrap();
        let context = context_from(config.raw());

        let header = render_header(HeaderStyle::Pandoc, &context, &pandoc_options()).unwrap();
        let metadata = pandoc_metadata(&header);

        assert_eq!(metadata["author"].as_sequence().unwrap().len(), 1);
        assert_eq!(metadata["author"][0]["name"], "Marco Bianchi");
        assert_eq!(metadata["author"][0]["affiliation"], "Educatore musicale");
    }

    #[test]
    fn test_missing_title_is_config_error() {
        let mut raw = sample_config().raw().clone();
        raw["progetto"].as_object_mut().unwrap().remove("titolo");
        let context = context_from(&raw);

        let err = render_header(HeaderStyle::Markdown, &context, &pandoc_options()).unwrap_err();
        assert!(matches!(err, PropgenError::Config(ref msg) if msg.contains("progetto.titolo")));
    }

    #[test]
    fn test_pandoc_header() {
        let context = context_from(sample_config().raw());
        let header = render_header(HeaderStyle::Pandoc, &context, &pandoc_options()).unwrap();

        assert!(header.starts_with("---\n"));
        assert!(header.ends_with("---\n\n"));

        let metadata = pandoc_metadata(&header);

        assert_eq!(metadata["title"], "Laboratorio di musica");
        assert_eq!(
            metadata["subtitle"],
            "Progetto per la scuola dell'infanzia - 2024/2025"
        );
        assert_eq!(metadata["documentclass"], "article");
        assert_eq!(metadata["author"][0]["name"], "Anna Rossi");
        assert_eq!(metadata["author"][0]["affiliation"], "Diplomata in pianoforte");
        assert_eq!(metadata["author"][1]["name"], "Marco Bianchi");
        assert_eq!(
            metadata["header-includes"][0],
            "\\newcommand{\\gruppo}{Sezione Girasoli}"
        );
        assert_eq!(metadata["header-includes"][1], "\\usepackage{styles/mystyle}");
    }

    #[test]
    fn test_pandoc_header_without_group_or_teachers() {
        let mut raw = sample_config().raw().clone();
        raw.as_object_mut().unwrap().remove("maestri");
        raw["progetto"].as_object_mut().unwrap().remove("gruppo");
        let context = context_from(&raw);

        let header = render_header(HeaderStyle::Pandoc, &context, &pandoc_options()).unwrap();
        let metadata = pandoc_metadata(&header);

        assert_eq!(metadata["author"].as_sequence().unwrap().len(), 0);
        assert_eq!(metadata["header-includes"].as_sequence().unwrap().len(), 1);
    }
}
