use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use comfy_table::{CellAlignment, Table};
use tracing::{info, info_span, warn};

use survey_common::format_numeric;
use survey_ingest::{default_output_path, read_survey_csv, write_survey_csv};
use survey_model::{LabelCatalog, ValueLabels};
use survey_standards::questionnaire::QUESTIONS;
use survey_standards::{build_catalog, default_catalog};
use survey_transform::{rename_to_questions, translate_with_report};

use crate::cli::TranslateArgs;
use crate::summary::{align_column, apply_table_style, header_cell};
use crate::types::{TranslateResult, VariableSummary};

pub fn run_translate(args: &TranslateArgs) -> Result<TranslateResult> {
    let catalog = default_catalog();
    let input = &args.input;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(input));
    let translate_span = info_span!("translate", input = %input.display());
    let _translate_guard = translate_span.enter();
    let start = Instant::now();

    let df = info_span!("ingest")
        .in_scope(|| read_survey_csv(input))
        .with_context(|| format!("read {}", input.display()))?;

    let (translated, report) = info_span!("transform", rows = df.height())
        .in_scope(|| translate_with_report(catalog, &df))
        .context("translate survey table")?;
    let translated = if args.question_headers {
        rename_to_questions(catalog, &translated).context("rename columns to questions")?
    } else {
        translated
    };

    info_span!("output", path = %output.display())
        .in_scope(|| write_survey_csv(&translated, &output))
        .with_context(|| format!("write {}", output.display()))?;

    if report.has_unmatched() {
        warn!(
            unmatched = report.total_unmatched(),
            "coded values without a label were written as empty cells"
        );
    }
    info!(
        rows = report.rows,
        coded_columns = report.coded_columns().count(),
        duration_ms = start.elapsed().as_millis(),
        "translation complete"
    );

    Ok(TranslateResult {
        input: input.clone(),
        output,
        report,
        question_headers: args.question_headers,
    })
}

/// Variables in questionnaire order with their code counts.
pub fn variable_summaries(catalog: &LabelCatalog) -> Vec<VariableSummary> {
    let ordered = QUESTIONS.iter().map(|(variable, _)| *variable);
    let extra = catalog
        .variable_labels()
        .keys()
        .map(String::as_str)
        .filter(|variable| !QUESTIONS.iter().any(|(known, _)| known == variable));
    ordered
        .chain(extra)
        .filter_map(|variable| {
            let question = catalog.question(variable)?;
            Some(VariableSummary {
                variable: variable.to_string(),
                question: question.to_string(),
                codes: catalog.value_labels(variable).map_or(0, ValueLabels::len),
            })
        })
        .collect()
}

pub fn run_variables(json: bool) -> Result<()> {
    let summaries = variable_summaries(default_catalog());
    if json {
        let text = serde_json::to_string_pretty(&summaries).context("serialize variables")?;
        println!("{text}");
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Variable"),
        header_cell("Question"),
        header_cell("Codes"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for summary in summaries {
        table.add_row(vec![
            summary.variable,
            summary.question,
            summary.codes.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Value labels of one variable, or an error naming the unknown variable.
pub fn lookup_codes<'a>(catalog: &'a LabelCatalog, variable: &str) -> Result<&'a ValueLabels> {
    catalog
        .value_labels(variable)
        .ok_or_else(|| anyhow!("unknown survey variable: {variable}"))
}

pub fn run_codes(variable: &str) -> Result<()> {
    let catalog = default_catalog();
    let labels = lookup_codes(catalog, variable)?;
    if let Some(question) = catalog.question(variable) {
        println!("{variable}: {question}");
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Label")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for entry in labels.entries() {
        table.add_row(vec![format_numeric(entry.code), entry.label.clone()]);
    }
    println!("{table}");
    Ok(())
}

/// Rebuild the codebook from its tables and validate it.
///
/// Returns the number of variables checked.
pub fn run_check() -> Result<usize> {
    let catalog = build_catalog().context("build codebook")?;
    catalog.validate().context("validate codebook")?;
    info!(variables = catalog.len(), "codebook is consistent");
    Ok(catalog.len())
}
