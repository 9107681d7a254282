mod error;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use error::{CliError, CliResult};
use qf_envision::{Envisionment, ExpansionOrder};
use qf_tank::{RuleSet, Scenario, SystemState, TankModel, TankReport, Violation, dot_label};

#[derive(Parser)]
#[command(name = "qf-cli")]
#[command(about = "QualiFlow CLI - Qualitative envisionment of a filling tank", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the envisionment graph from an initial state
    Envision {
        /// Scenario YAML file (defaults to the built-in empty tank)
        #[arg(long)]
        scenario: Option<PathBuf>,
        /// Expansion order, overriding the scenario
        #[arg(long, value_enum)]
        order: Option<OrderArg>,
        /// Allow volume and outflow trends of opposite sign
        #[arg(long)]
        lenient: bool,
        /// Maximum number of retained states, overriding the scenario
        #[arg(long)]
        max_states: Option<usize>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Summary)]
        format: Format,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check a scenario's initial state against the boundary constraints
    Check {
        /// Scenario YAML file
        #[arg(long)]
        scenario: PathBuf,
    },
    /// List the rule table
    Rules,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    Breadth,
    Depth,
}

impl From<OrderArg> for ExpansionOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Breadth => ExpansionOrder::BreadthFirst,
            OrderArg::Depth => ExpansionOrder::DepthFirst,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Summary,
    Dot,
    Json,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Envision {
            scenario,
            order,
            lenient,
            max_states,
            format,
            output,
        } => {
            let mut scenario = load_scenario(scenario.as_deref())?;
            apply_overrides(&mut scenario, order, lenient, max_states);
            cmd_envision(&scenario, format, output.as_deref())
        }
        Commands::Check { scenario } => cmd_check(&scenario),
        Commands::Rules => cmd_rules(),
    }
}

fn load_scenario(path: Option<&Path>) -> CliResult<Scenario> {
    match path {
        Some(path) => Ok(Scenario::load(path)?),
        None => Ok(Scenario::empty_tank()),
    }
}

/// Command-line flags win over the scenario's search section.
fn apply_overrides(
    scenario: &mut Scenario,
    order: Option<OrderArg>,
    lenient: bool,
    max_states: Option<usize>,
) {
    if let Some(order) = order {
        scenario.search.order = order.into();
    }
    if lenient {
        scenario.search.strict_proportionality = false;
    }
    if let Some(max_states) = max_states {
        scenario.search.max_states = max_states;
    }
}

fn cmd_envision(scenario: &Scenario, format: Format, output: Option<&Path>) -> CliResult<()> {
    let initial = scenario.initial_state()?;
    let model = TankModel::new(scenario.validator());
    let env = model.envision(initial, &scenario.search_options())?;

    let text = match format {
        Format::Summary => render_summary(scenario.name.as_deref(), &env),
        Format::Dot => env.graph.to_dot(dot_label),
        Format::Json => TankReport::from_envisionment(scenario.name.as_deref(), &env).to_json()?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, text).map_err(|source| CliError::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
            println!("✓ Wrote {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn render_summary(name: Option<&str>, env: &Envisionment<SystemState>) -> String {
    let graph = &env.graph;
    let stats = &env.stats;
    let terminal_count = graph.terminal_states().count();

    let mut out = String::new();
    if let Some(name) = name {
        out.push_str(&format!("Scenario: {}\n", name));
    }
    out.push_str(&format!(
        "States: {} ({} terminal)\nTransitions: {}\n",
        graph.states().len(),
        terminal_count,
        graph.transitions().len()
    ));
    out.push_str(&format!(
        "Search: expanded={} generated={} rejected={} merged={} self_loops={}\n",
        stats.expanded, stats.generated, stats.rejected, stats.merged, stats.self_loops
    ));

    out.push_str("\nStates:\n");
    for node in graph.states() {
        let successors: Vec<String> = node.successors.iter().map(|s| format!("S{}", s)).collect();
        let arrow = if node.is_terminal() {
            "terminal".to_string()
        } else {
            format!("-> {}", successors.join(", "))
        };
        let label = format!("S{}", node.id);
        out.push_str(&format!("  {:<4} {}  {}\n", label, node.state, arrow));
    }

    out.push_str("\nTransitions:\n");
    for t in graph.transitions() {
        out.push_str(&format!(
            "  S{} -> S{}  [{}] {}\n",
            t.from, t.to, t.kind, t.justification
        ));
    }
    out
}

/// Initial state of the scenario at `path` and the constraints it breaks.
fn scenario_violations(path: &Path) -> CliResult<(SystemState, Vec<Violation>)> {
    let scenario = Scenario::load(path)?;
    let state = scenario.initial_state()?;
    let violations = scenario.validator().violations(&state);
    Ok((state, violations))
}

fn cmd_check(path: &Path) -> CliResult<()> {
    println!("Checking scenario: {}", path.display());
    let (state, violations) = scenario_violations(path)?;
    println!("  Initial state: {}", state);

    if violations.is_empty() {
        println!("✓ Initial state is admissible");
        return Ok(());
    }
    for v in &violations {
        println!("  ✗ {}", v);
    }
    // seeds are expanded as given; only successors are screened
    println!("  Envisionment still starts here; its successors must satisfy every constraint");
    Ok(())
}

fn cmd_rules() -> CliResult<()> {
    let rules = RuleSet::tank();
    println!("Rules ({}), in evaluation order:", rules.rules().len());
    for rule in rules.rules() {
        println!("  {:<32} {:<9} {}", rule.name, rule.kind.as_str(), rule.justification);
    }
    Ok(())
}
