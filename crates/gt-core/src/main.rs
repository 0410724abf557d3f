//! Ghost Triage - Deduction and Narrowing Engine
//!
//! The main entry point for gt, handling:
//! - Observation documents and the full deduction recompute
//! - Per-candidate speed profiles under situational factors
//! - Footstep tempo measurement and tempo-based narrowing
//! - Hunt safety classification and repeated-check confidence
//! - JSON and plain-text report rendering

use clap::{Args, Parser, Subcommand};
use gt_catalog::{Catalog, Evidence, GhostKind, SecondaryCategory};
use gt_common::{
    format_bpm, format_seconds, format_speed, Error, OutputFormat, SessionId, StructuredError,
    TemperatureUnit, SCHEMA_VERSION,
};
use gt_core::exit_codes::ExitCode;
use gt_core::interest::{Interest, OptionMark, PrimaryInsight, SecondaryInsight};
use gt_core::logging::{generate_run_id, init_logging, LogLevel};
use gt_core::speed::{GhostProfile, SpeedMarker, TapTracker};
use gt_core::state::{SituationalFactors, SpeedMultiplier};
use gt_core::{DeductionReport, Engine, Observations};
use std::collections::BTreeSet;
use std::io::{IsTerminal, Read};

/// Ghost Triage - evidence-based ghost identification
#[derive(Parser)]
#[command(name = "gt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "json")]
    format: OutputFormat,

    /// Display temperatures in Fahrenheit
    #[arg(long, global = true)]
    fahrenheit: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

impl GlobalOpts {
    fn temperature_unit(&self) -> TemperatureUnit {
        if self.fahrenheit {
            TemperatureUnit::Fahrenheit
        } else {
            TemperatureUnit::Celsius
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Full recompute: verdicts, guidance, speed profiles, hunt safety
    Report(ReportArgs),

    /// Possible speeds for each candidate under the given conditions
    Speed(SpeedArgs),

    /// Convert footstep taps to tempo and a regressed speed estimate
    Tempo(TempoArgs),

    /// Candidates whose possible speeds cannot produce a measured tempo
    Narrow(NarrowArgs),

    /// List the candidates, evidence kinds, and secondary categories
    Catalog(CatalogArgs),

    /// Classify hunt safety from time elapsed since incense
    Safety(SafetyArgs),

    /// Cumulative detection confidence over repeated checks
    Confidence(ConfidenceArgs),

    /// Print version information
    Version,
}

// ============================================================================
// Command argument structs
// ============================================================================

#[derive(Args, Debug)]
struct ReportArgs {
    /// Observation document path ("-" reads stdin; omit for no observations)
    input: Option<String>,
}

#[derive(Args, Debug)]
struct SpeedArgs {
    /// Sustained line of sight so far (seconds)
    #[arg(long)]
    los: Option<f64>,

    /// Whether the fuse box breaker is on
    #[arg(long)]
    breaker: Option<bool>,

    /// Room temperature (degrees Celsius)
    #[arg(long)]
    temperature: Option<f64>,

    /// Average team sanity as a fraction, 0 to 1
    #[arg(long)]
    sanity: Option<f64>,

    /// Distance from the ghost to its nearest target (meters)
    #[arg(long)]
    distance: Option<f64>,

    /// Seconds the ghost has spent near a player this hunt
    #[arg(long)]
    proximity: Option<f64>,

    /// Whether active electronics are near the ghost
    #[arg(long)]
    electronics: Option<bool>,

    /// Whether the ghost has detected held electronics
    #[arg(long)]
    held_electronics: Option<bool>,

    /// Whether the nearest player is under incense effects
    #[arg(long)]
    incensed: Option<bool>,
}

impl SpeedArgs {
    fn factors(&self) -> SituationalFactors {
        SituationalFactors {
            line_of_sight_seconds: self.los,
            breaker_on: self.breaker,
            temperature_celsius: self.temperature,
            sanity_fraction: self.sanity,
            distance_meters: self.distance,
            proximity_seconds: self.proximity,
            near_electronics: self.electronics,
            detected_held_electronics: self.held_electronics,
            incensed: self.incensed,
        }
    }
}

#[derive(Args, Debug)]
struct TempoArgs {
    /// Tap timestamps in milliseconds, oldest first. Gaps over two seconds
    /// start a new sequence; only the latest sequence counts.
    #[arg(required = true)]
    taps: Vec<i64>,

    /// Speed multiplier percentage code (50, 75, 100, 125, 150)
    #[arg(long, default_value = "100")]
    multiplier: String,
}

#[derive(Args, Debug)]
struct NarrowArgs {
    /// Observation document path ("-" reads stdin; omit for no observations)
    input: Option<String>,

    /// Measured average tempo in beats per minute
    #[arg(long, required_unless_present = "taps", conflicts_with = "taps")]
    bpm: Option<f64>,

    /// Tap timestamps in milliseconds, oldest first
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    taps: Vec<i64>,

    /// Override the document's speed multiplier percentage code
    #[arg(long)]
    multiplier: Option<String>,
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Show one candidate in detail
    ghost: Option<String>,
}

#[derive(Args, Debug)]
struct SafetyArgs {
    /// Seconds since incense was burned
    #[arg(long)]
    elapsed: f64,

    /// Observation document narrowing the field ("-" reads stdin)
    input: Option<String>,
}

#[derive(Args, Debug)]
struct ConfidenceArgs {
    /// Per-check detection probability, 0 to 1
    probability: f64,

    /// Number of independent checks
    #[arg(default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    trials: u32,
}

// ============================================================================
// Main entry point
// ============================================================================

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.global.quiet {
        LogLevel::Error
    } else {
        match cli.global.verbose {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    };
    init_logging(log_level);

    let run_id = generate_run_id();
    let span = tracing::info_span!("gt", run_id = %run_id);
    let _guard = span.enter();

    let exit_code = match cli.command {
        None => {
            // Default: fresh report with nothing observed yet
            run_report(&cli.global, &ReportArgs { input: None })
        }
        Some(Commands::Report(args)) => run_report(&cli.global, &args),
        Some(Commands::Speed(args)) => run_speed(&cli.global, &args),
        Some(Commands::Tempo(args)) => run_tempo(&cli.global, &args),
        Some(Commands::Narrow(args)) => run_narrow(&cli.global, &args),
        Some(Commands::Catalog(args)) => run_catalog(&cli.global, &args),
        Some(Commands::Safety(args)) => run_safety(&cli.global, &args),
        Some(Commands::Confidence(args)) => run_confidence(&cli.global, &args),
        Some(Commands::Version) => {
            print_version(&cli.global);
            ExitCode::Success
        }
    };

    std::process::exit(exit_code.as_i32());
}

// ============================================================================
// Command implementations
// ============================================================================

fn run_report(global: &GlobalOpts, args: &ReportArgs) -> ExitCode {
    let observations = match load_observations(args.input.as_deref()) {
        Ok(observations) => observations,
        Err(e) => return output_error(global, &e),
    };
    let engine = match Engine::new() {
        Ok(engine) => engine,
        Err(e) => return output_error(global, &e),
    };

    let report = engine.assess(&observations, global.temperature_unit());

    match global.format {
        OutputFormat::Json => {
            let session_id = SessionId::new();
            let output = serde_json::json!({
                "schema_version": SCHEMA_VERSION,
                "session_id": session_id.0,
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "report": report,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
        OutputFormat::Text => {
            print_report_text(&report);
        }
    }

    ExitCode::Success
}

fn run_speed(global: &GlobalOpts, args: &SpeedArgs) -> ExitCode {
    let catalog = Catalog::standard();
    let factors = args.factors();
    let profiles = gt_core::speed::profiles(&catalog, &factors, global.temperature_unit());

    match global.format {
        OutputFormat::Json => {
            let session_id = SessionId::new();
            let output = serde_json::json!({
                "schema_version": SCHEMA_VERSION,
                "session_id": session_id.0,
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "speed": {
                    "factors": factors,
                    "profiles": profiles,
                },
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
        OutputFormat::Text => {
            println!("# Possible Speeds");
            println!();
            for profile in &profiles {
                println!(
                    "  {}: {}",
                    profile.kind.display_name(),
                    describe_profile(profile)
                );
            }
        }
    }

    ExitCode::Success
}

fn run_tempo(global: &GlobalOpts, args: &TempoArgs) -> ExitCode {
    let multiplier = match SpeedMultiplier::from_code(&args.multiplier) {
        Ok(multiplier) => multiplier,
        Err(e) => return output_error(global, &e),
    };
    let tracker = match TapTracker::from_timestamps(&args.taps) {
        Ok(tracker) => tracker,
        Err(e) => return output_error(global, &e),
    };
    let engine = match Engine::new() {
        Ok(engine) => engine,
        Err(e) => return output_error(global, &e),
    };

    let average_bpm = tracker.average_bpm();
    let rolling_bpm = tracker.rolling_bpm();
    // The regression maps tempo to on-screen speed at 100%; dividing by the
    // lobby multiplier recovers the candidate's base-rule speed.
    let estimated_speed = average_bpm.map(|bpm| {
        engine.regression().speed_from_tempo(bpm) / multiplier.factor()
    });

    match global.format {
        OutputFormat::Json => {
            let session_id = SessionId::new();
            let output = serde_json::json!({
                "schema_version": SCHEMA_VERSION,
                "session_id": session_id.0,
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "tempo": {
                    "taps": args.taps.len(),
                    "sequence_length": tracker.len(),
                    "average_bpm": average_bpm,
                    "rolling_bpm": rolling_bpm,
                    "multiplier": multiplier.code(),
                    "estimated_speed": estimated_speed,
                },
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
        OutputFormat::Text => {
            println!("# Footstep Tempo");
            println!();
            println!(
                "Sequence: {} of {} taps",
                tracker.len(),
                args.taps.len()
            );
            match average_bpm {
                Some(bpm) => println!("Average: {}", format_bpm(bpm)),
                None => println!("Average: not enough taps"),
            }
            if let Some(speed) = estimated_speed {
                println!(
                    "Estimated speed: {} (at {}% multiplier)",
                    format_speed(speed),
                    multiplier.code()
                );
            }
            if !rolling_bpm.is_empty() {
                let rolling = rolling_bpm
                    .iter()
                    .map(|bpm| format!("{:.1}", bpm))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("Rolling: {} bpm", rolling);
            }
        }
    }

    ExitCode::Success
}

fn run_narrow(global: &GlobalOpts, args: &NarrowArgs) -> ExitCode {
    let mut observations = match load_observations(args.input.as_deref()) {
        Ok(observations) => observations,
        Err(e) => return output_error(global, &e),
    };
    if let Some(code) = &args.multiplier {
        observations.speed_multiplier = match SpeedMultiplier::from_code(code) {
            Ok(multiplier) => multiplier,
            Err(e) => return output_error(global, &e),
        };
    }

    let average_bpm = match args.bpm {
        Some(bpm) => bpm,
        None => {
            let tracker = match TapTracker::from_timestamps(&args.taps) {
                Ok(tracker) => tracker,
                Err(e) => return output_error(global, &e),
            };
            match tracker.average_bpm() {
                Some(bpm) => bpm,
                None => return output_error(global, &Error::InsufficientTaps),
            }
        }
    };

    let engine = match Engine::new() {
        Ok(engine) => engine,
        Err(e) => return output_error(global, &e),
    };
    let excluded = engine.narrow_by_tempo(&observations, average_bpm);
    let kept: Vec<GhostKind> = GhostKind::all()
        .iter()
        .copied()
        .filter(|kind| !excluded.contains(kind))
        .collect();

    match global.format {
        OutputFormat::Json => {
            let session_id = SessionId::new();
            let output = serde_json::json!({
                "schema_version": SCHEMA_VERSION,
                "session_id": session_id.0,
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "narrow": {
                    "average_bpm": average_bpm,
                    "multiplier": observations.speed_multiplier.code(),
                    "excluded": excluded,
                    "kept": kept,
                },
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
        OutputFormat::Text => {
            println!("# Tempo Narrowing");
            println!();
            println!(
                "Measured {} at {}% multiplier",
                format_bpm(average_bpm),
                observations.speed_multiplier.code()
            );
            println!();
            println!("## Excluded ({})", excluded.len());
            for kind in &excluded {
                println!("  ✗ {}", kind.display_name());
            }
            println!();
            println!("## Still possible ({})", kept.len());
            for kind in &kept {
                println!("  ✓ {}", kind.display_name());
            }
        }
    }

    ExitCode::Success
}

fn run_catalog(global: &GlobalOpts, args: &CatalogArgs) -> ExitCode {
    let catalog = Catalog::standard();

    if let Some(name) = &args.ghost {
        let kind = match GhostKind::from_name(name) {
            Some(kind) => kind,
            None => {
                return output_error(global, &Error::UnknownGhost { name: name.clone() });
            }
        };
        let ghost = catalog.get(kind);

        match global.format {
            OutputFormat::Json => {
                let session_id = SessionId::new();
                let output = serde_json::json!({
                    "schema_version": SCHEMA_VERSION,
                    "session_id": session_id.0,
                    "generated_at": chrono::Utc::now().to_rfc3339(),
                    "ghost": ghost,
                });
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            }
            OutputFormat::Text => {
                println!("# {}", kind.display_name());
                println!();
                println!("Evidence: {}", evidence_names(ghost.evidence.normal.iter()));
                if !ghost.evidence.guaranteed.is_empty() {
                    println!(
                        "Guaranteed: {}",
                        evidence_names(ghost.evidence.guaranteed.iter())
                    );
                }
                if !ghost.evidence.special.is_empty() {
                    println!(
                        "Always exhibited: {}",
                        evidence_names(ghost.evidence.special.iter())
                    );
                }
                println!("Hunt threshold: at or below {}% sanity", ghost.hunt_threshold);
                println!(
                    "Incense suspension: {}",
                    format_seconds(ghost.suspension.seconds())
                );
                println!("Hunt flicker: {}", ghost.flicker.display_name());
                println!(
                    "Salt footprints: {}",
                    if ghost.leaves_salt_footprints { "yes" } else { "no" }
                );
            }
        }

        return ExitCode::Success;
    }

    match global.format {
        OutputFormat::Json => {
            let categories: Vec<serde_json::Value> = SecondaryCategory::all()
                .iter()
                .map(|category| {
                    serde_json::json!({
                        "name": category.name(),
                        "display_name": category.display_name(),
                        "prerequisite": category.prerequisite().map(|e| e.name()),
                        "banded": category.is_banded(),
                    })
                })
                .collect();
            let session_id = SessionId::new();
            let output = serde_json::json!({
                "schema_version": SCHEMA_VERSION,
                "session_id": session_id.0,
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "catalog": {
                    "ghosts": catalog.ghosts(),
                    "evidence": Evidence::all(),
                    "secondary_categories": categories,
                },
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
        OutputFormat::Text => {
            println!("# Catalog");
            println!();
            println!("## Candidates ({})", catalog.len());
            for ghost in catalog.ghosts() {
                println!(
                    "  {}: {}",
                    ghost.kind.display_name(),
                    evidence_names(ghost.evidence.normal.iter())
                );
            }
            println!();
            println!("## Evidence kinds");
            for kind in Evidence::all() {
                println!("  {} ({})", kind.display_name(), kind.name());
            }
            println!();
            println!("## Secondary categories");
            for category in SecondaryCategory::all() {
                match category.prerequisite() {
                    Some(evidence) => println!(
                        "  {} (requires {})",
                        category.display_name(),
                        evidence.display_name()
                    ),
                    None => println!("  {}", category.display_name()),
                }
            }
        }
    }

    ExitCode::Success
}

fn run_safety(global: &GlobalOpts, args: &SafetyArgs) -> ExitCode {
    let mut observations = match load_observations(args.input.as_deref()) {
        Ok(observations) => observations,
        Err(e) => return output_error(global, &e),
    };
    observations.seconds_since_incense = Some(args.elapsed);

    let engine = match Engine::new() {
        Ok(engine) => engine,
        Err(e) => return output_error(global, &e),
    };
    let report = engine.assess(&observations, global.temperature_unit());

    match global.format {
        OutputFormat::Json => {
            let session_id = SessionId::new();
            let output = serde_json::json!({
                "schema_version": SCHEMA_VERSION,
                "session_id": session_id.0,
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "safety": report.safety,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
        OutputFormat::Text => {
            println!("# Hunt Safety");
            println!();
            match &report.safety {
                Some(safety) => println!("  {}", describe_safety(safety)),
                None => println!("  No surviving candidates to assess."),
            }
        }
    }

    ExitCode::Success
}

fn run_confidence(global: &GlobalOpts, args: &ConfidenceArgs) -> ExitCode {
    let cumulative = match gt_core::confidence::cumulative_confidence(
        args.probability,
        args.trials,
    ) {
        Ok(cumulative) => cumulative,
        Err(e) => return output_error(global, &e),
    };

    match global.format {
        OutputFormat::Json => {
            let session_id = SessionId::new();
            let output = serde_json::json!({
                "schema_version": SCHEMA_VERSION,
                "session_id": session_id.0,
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "confidence": {
                    "probability": args.probability,
                    "trials": args.trials,
                    "cumulative": cumulative,
                },
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
        OutputFormat::Text => {
            println!("# Detection Confidence");
            println!();
            println!(
                "  {:.1}% per check over {} checks: {:.1}% cumulative",
                args.probability * 100.0,
                args.trials,
                cumulative * 100.0
            );
        }
    }

    ExitCode::Success
}

fn print_version(global: &GlobalOpts) {
    let version_info = serde_json::json!({
        "schema_version": SCHEMA_VERSION,
        "gt_version": env!("CARGO_PKG_VERSION"),
        "rust_version": env!("CARGO_PKG_RUST_VERSION"),
    });

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&version_info).unwrap());
        }
        OutputFormat::Text => {
            println!("gt {}", env!("CARGO_PKG_VERSION"));
            println!("schema version: {}", SCHEMA_VERSION);
        }
    }
}

// ============================================================================
// Shared helpers
// ============================================================================

/// Read an observation document from a file, stdin ("-"), or nowhere.
fn load_observations(input: Option<&str>) -> gt_common::Result<Observations> {
    let Some(path) = input else {
        return Ok(Observations::default());
    };
    let raw = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };
    let observations = serde_json::from_str(&raw)?;
    Ok(observations)
}

/// Report an error on stderr in the selected format and map it to an exit
/// code. stdout stays clean for payloads.
fn output_error(global: &GlobalOpts, err: &Error) -> ExitCode {
    match global.format {
        OutputFormat::Json => {
            let session_id = SessionId::new();
            let response = serde_json::json!({
                "schema_version": SCHEMA_VERSION,
                "session_id": session_id.0,
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "error": StructuredError::from(err),
            });
            eprintln!("{}", serde_json::to_string_pretty(&response).unwrap());
        }
        OutputFormat::Text => {
            let use_color = !global.no_color && std::io::stderr().is_terminal();
            eprintln!("{}", gt_common::format_error_human(err, use_color));
        }
    }
    ExitCode::from(err)
}

// ============================================================================
// Text rendering
// ============================================================================

fn print_report_text(report: &DeductionReport) {
    println!("# Deduction Report");
    println!();
    println!(
        "{} of {} candidates remain",
        report.remaining,
        report.verdicts.len()
    );
    println!();

    println!("## Candidates");
    for verdict in &report.verdicts {
        if verdict.is_possible() {
            println!("  ✓ {}", verdict.ghost.display_name());
        } else {
            println!(
                "  ✗ {}: {}",
                verdict.ghost.display_name(),
                verdict.reason_strings().join("; ")
            );
        }
    }
    println!();

    println!("## Evidence");
    for insight in &report.primary_insights {
        println!("  {}", describe_primary(insight));
    }
    println!();

    println!("## Secondary observations");
    for insight in &report.secondary_insights {
        println!("  {}", describe_secondary(insight));
    }
    println!();

    let survivors: BTreeSet<GhostKind> = report.survivors().into_iter().collect();
    println!("## Possible speeds");
    for profile in report
        .profiles
        .iter()
        .filter(|p| survivors.contains(&p.kind))
    {
        println!(
            "  {}: {}",
            profile.kind.display_name(),
            describe_profile(profile)
        );
    }

    if let Some(safety) = &report.safety {
        println!();
        println!("## Hunt safety");
        println!("  {}", describe_safety(safety));
    }
}

fn describe_primary(insight: &PrimaryInsight) -> String {
    let mut line = format!(
        "{}: {}",
        insight.evidence.display_name(),
        interest_label(insight.interest)
    );
    let notes = mark_notes(&[
        ("confirming", insight.confirm),
        ("ruling out", insight.rule_out),
        ("leaving unresolved", insight.unknown),
    ]);
    if !notes.is_empty() {
        line.push_str(&format!(" ({})", notes.join(", ")));
    }
    line
}

fn describe_secondary(insight: &SecondaryInsight) -> String {
    let mut line = format!(
        "{}: {}",
        insight.category.display_name(),
        interest_label(insight.interest)
    );
    let mut notes = Vec::new();
    for option in &insight.options {
        match option.mark {
            OptionMark::Impossible => {
                notes.push(format!("{} would empty the field", option.tag.option_label()));
            }
            OptionMark::Inevitable => {
                notes.push(format!("{} is forced", option.tag.option_label()));
            }
            OptionMark::Neutral => {}
        }
    }
    if !notes.is_empty() {
        line.push_str(&format!(" ({})", notes.join(", ")));
    }
    line
}

fn mark_notes(marks: &[(&str, OptionMark)]) -> Vec<String> {
    let mut notes = Vec::new();
    for (label, mark) in marks {
        match mark {
            OptionMark::Impossible => notes.push(format!("{label} would empty the field")),
            OptionMark::Inevitable => notes.push(format!("{label} is forced")),
            OptionMark::Neutral => {}
        }
    }
    notes
}

fn interest_label(interest: Interest) -> &'static str {
    match interest {
        Interest::Interesting => "worth testing",
        Interest::Investigated => "already resolved",
        Interest::Uninteresting => "would not narrow the field",
        Interest::Impossible => "unavailable",
    }
}

fn describe_profile(profile: &GhostProfile) -> String {
    profile
        .markers
        .iter()
        .map(describe_marker)
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_marker(marker: &SpeedMarker) -> String {
    match marker {
        SpeedMarker::Point { label, speed } => {
            format!("{} ({})", format_speed(*speed), label)
        }
        SpeedMarker::Span { low, high, .. } => {
            format!("{} to {}", format_speed(*low), format_speed(*high))
        }
    }
}

fn describe_safety(safety: &gt_core::safety::SafetyAssessment) -> String {
    format!(
        "{}: safe under {}, past every window at {}, {} elapsed",
        safety.classification,
        format_seconds(safety.min_safe_seconds),
        format_seconds(safety.max_safe_seconds),
        format_seconds(safety.elapsed_seconds)
    )
}

fn evidence_names(kinds: impl Iterator<Item = Evidence>) -> String {
    let names: Vec<&str> = kinds.map(|kind| kind.display_name()).collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
