use academy_candidates::config::{self, AppConfig, WriteFailurePolicy};
use academy_candidates::error::AppError;
use academy_candidates::telemetry;
use academy_candidates::workflows::academy::summary::RoleShareEntry;
use academy_candidates::workflows::academy::{
    write_report, AcademySummary, CandidateImporter, ReportWriteError,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

const NOT_FOUND_LABEL: &str = "não encontrado";

#[derive(Parser, Debug)]
#[command(
    name = "academy-report",
    about = "Summarize academy candidates by role and export them sorted by name",
    version
)]
struct Cli {
    /// Candidate file to read (overrides ACADEMY_INPUT)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Report file to write (overrides ACADEMY_OUTPUT)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Comma separated roles considered by the statistics (overrides ACADEMY_STATS_ROLES)
    #[arg(long)]
    roles: Option<String>,
    /// Print the summary as JSON instead of text lines
    #[arg(long)]
    json: bool,
    /// Skip writing the sorted report file
    #[arg(long)]
    no_export: bool,
}

#[derive(Debug)]
enum ExportOutcome {
    Written(PathBuf),
    Skipped,
    Failed(ReportWriteError),
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(input) = cli.input {
        config.input.path = input;
    }
    if let Some(output) = cli.output {
        config.report.output_path = output;
    }
    if let Some(roles) = cli.roles.as_deref() {
        config.report.stats_roles = Some(config::parse_role_list(roles, "--roles")?);
    }

    telemetry::init(&config.telemetry)?;
    info!(?config.environment, input = %config.input.path.display(), "academy report starting");

    let groups = CandidateImporter::from_path(&config.input.path)?;
    let roles = config
        .report
        .stats_roles
        .clone()
        .unwrap_or_else(|| groups.roles().to_vec());
    for role in roles.iter().filter(|role| !groups.contains_role(role)) {
        warn!(%role, "requested role has no candidates");
    }

    let summary = AcademySummary::build(&groups, roles.as_slice(), &config.report.focus)?;

    let export = if cli.no_export {
        ExportOutcome::Skipped
    } else {
        match write_report(&config.report.output_path, &groups) {
            Ok(_) => ExportOutcome::Written(config.report.output_path.clone()),
            Err(err) => match config.report.write_failures {
                WriteFailurePolicy::Fail => return Err(err.into()),
                WriteFailurePolicy::Warn => {
                    warn!(error = %err, "report write failed; continuing");
                    ExportOutcome::Failed(err)
                }
            },
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        render_summary(&summary);
    }

    match export {
        ExportOutcome::Written(path) if !cli.json => {
            println!("Arquivo CSV criado com sucesso: {}", path.display());
        }
        ExportOutcome::Failed(err) => eprintln!("Erro ao criar o arquivo CSV: {err}"),
        ExportOutcome::Written(_) | ExportOutcome::Skipped => {}
    }

    Ok(())
}

fn render_summary(summary: &AcademySummary) {
    println!("Os percentuais de candidatos por vaga são: ");
    println!("{}", format_percentages(&summary.percentages));

    println!(
        "Idade média dos candidatos de {}: {}",
        summary.average_age.role, summary.average_age.value
    );
    println!(
        "Idade do candidato mais velho de {}: {}",
        summary.oldest.role, summary.oldest.value
    );
    println!(
        "Idade do candidato mais novo de {}: {}",
        summary.youngest.role, summary.youngest.value
    );
    println!(
        "Soma das idades dos candidatos de {}: {}",
        summary.total_age.role, summary.total_age.value
    );

    println!(
        "Número de estados distintos presentes entre os candidatos: {}",
        summary.distinct_states
    );

    println!(
        "Instrutor {} descoberto: {}",
        summary.qa_instructor.role,
        instructor_label(&summary.qa_instructor.value)
    );
    println!(
        "Instrutor de {} descoberto: {}",
        summary.mobile_instructor.role,
        instructor_label(&summary.mobile_instructor.value)
    );
}

/// Renders `[ QA: '50.00%', Web: '50.00%' ]`, or `[]` with no roles.
fn format_percentages(entries: &[RoleShareEntry]) -> String {
    if entries.is_empty() {
        return "[]".to_string();
    }

    let body = entries
        .iter()
        .map(|entry| format!("{}: '{}'", entry.role, entry.percentage))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[ {body} ]")
}

fn instructor_label(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or(NOT_FOUND_LABEL)
}
