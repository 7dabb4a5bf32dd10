use clap::{Parser, Subcommand};
use std::path::PathBuf;

use car_scout::catalog::{self, Category, FuelType, SearchFilters, Vehicle};
use car_scout::cli::{CommandError, CriteriaOverrides, EXIT_CONFIG, EXIT_STORAGE, EXIT_SUCCESS};
use car_scout::config::{self, Config};
use car_scout::output::{self, ScoredVehicle};
use car_scout::ranking::{self, ScoreMap, SortKey};
use car_scout::scoring::{self, Criteria, Priority, Usage};
use car_scout::store::{self, FileStore, Toggle};
use car_scout::{dealers, reviews};

const DEFAULT_DOWN_PAYMENT_RATIO: f64 = 0.2;

#[derive(Subcommand, Debug)]
enum Commands {
    /// List vehicles, best fit first unless --sort says otherwise (default if no subcommand)
    List {
        /// Sort order: score, price or consumption
        #[arg(long)]
        sort: Option<SortKey>,

        /// Only vehicles whose "brand model" contains this text
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long)]
        category: Option<Category>,

        /// Drop vehicles priced above this
        #[arg(long)]
        max_price: Option<f64>,

        #[arg(long)]
        fuel_type: Option<FuelType>,

        /// Only saved favorites
        #[arg(long)]
        favorites: bool,

        /// Tab-separated output for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// Show the best matches
    Top {
        /// How many (defaults to top_n from config, or 3)
        #[arg(short)]
        n: Option<usize>,

        #[arg(long)]
        tsv: bool,
    },
    /// Show one vehicle with its score breakdown
    Show { id: String },
    /// Manage favorites
    Fav {
        #[command(subcommand)]
        action: FavAction,
    },
    /// Manage the side-by-side comparison
    Compare {
        #[command(subcommand)]
        action: CompareAction,
    },
    /// Recently viewed vehicles, newest first
    Recent,
    /// Owner reviews of a vehicle
    Reviews { id: String },
    /// Dealers carrying any of the given brands (all dealers if none given)
    Dealers {
        brands: Vec<String>,

        /// Use this vehicle's brand
        #[arg(long)]
        vehicle: Option<String>,
    },
    /// Estimate loan and lease payments for a vehicle
    Finance {
        id: String,

        /// Down payment (default: 20% of the price)
        #[arg(long)]
        down: Option<f64>,

        #[arg(long, default_value_t = 0.0)]
        trade_in: f64,

        /// Annual interest rate in percent
        #[arg(long, default_value_t = 3.5)]
        rate: f64,

        #[arg(long, default_value_t = 60)]
        months: u32,
    },
    /// Ask the assistant
    Chat {
        message: Vec<String>,

        /// Fix the reply choice
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Interactive setup wizard for your config
    Init,
}

#[derive(Subcommand, Debug)]
enum FavAction {
    /// Add a vehicle to favorites
    Add { id: String },
    /// Remove a vehicle from favorites
    Remove { id: String },
    /// Add if missing, remove if present
    Toggle { id: String },
    /// List favorites
    List,
}

#[derive(Subcommand, Debug)]
enum CompareAction {
    Add { id: String },
    Remove { id: String },
    /// Show the selection with a summary
    Show,
    Clear,
}

#[derive(Parser, Debug)]
#[command(name = "car-scout")]
#[command(about = "Rank cars by how well they fit your budget and needs", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/car-scout/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Budget in currency units
    #[arg(long, global = true)]
    budget: Option<f64>,

    /// Preferred fuel: gasoline, diesel, electric, hybrid, or "any"
    #[arg(long, global = true)]
    fuel: Option<String>,

    /// city, road or mixed
    #[arg(long, global = true)]
    usage: Option<Usage>,

    /// economy, performance, comfort or ecology
    #[arg(long, global = true)]
    priority: Option<Priority>,

    /// Seats needed
    #[arg(long, global = true)]
    family_size: Option<u32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Everything a subcommand needs once startup checks have passed
struct Session {
    config: Config,
    criteria: Criteria,
    vehicles: Vec<Vehicle>,
    store: FileStore,
    use_colors: bool,
}

impl Session {
    fn vehicle(&self, id: &str) -> Result<&Vehicle, CommandError> {
        catalog::find_vehicle(&self.vehicles, id)
            .ok_or_else(|| CommandError::Input(format!("Unknown vehicle id '{}'", id)))
    }

    /// Look up saved ids, skipping any no longer in the catalog
    fn resolve(&self, ids: &[String]) -> Vec<&Vehicle> {
        ids.iter()
            .filter_map(|id| {
                let found = catalog::find_vehicle(&self.vehicles, id);
                if found.is_none() {
                    log::warn!("Saved id '{}' is not in the catalog, skipping", id);
                }
                found
            })
            .collect()
    }

    fn print_vehicles(&self, vehicles: &[&Vehicle], scores: &ScoreMap, tsv: bool) {
        let scored = to_scored(vehicles, scores);
        if tsv {
            let out = output::format_tsv(&scored);
            if !out.is_empty() {
                println!("{}", out);
            }
        } else {
            println!("{}", output::format_scored_table(&scored, self.use_colors));
        }
    }
}

fn to_scored<'a>(vehicles: &[&'a Vehicle], scores: &ScoreMap) -> Vec<ScoredVehicle<'a>> {
    vehicles
        .iter()
        .map(|&v| ScoredVehicle {
            vehicle: v,
            score: scores.get(&v.id).copied().unwrap_or(0),
        })
        .collect()
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

impl Cli {
    fn criteria_overrides(&self) -> CriteriaOverrides {
        CriteriaOverrides {
            budget: self.budget,
            fuel: self.fuel.clone(),
            usage: self.usage,
            priority: self.priority,
            family_size: self.family_size,
        }
    }
}

fn load_builtin<T>(what: &str, loaded: anyhow::Result<T>) -> Result<T, CommandError> {
    loaded.map_err(|e| CommandError::Input(format!("Failed to load {}: {:#}", what, e)))
}

fn print_errors(heading: &str, errors: &[String]) {
    eprintln!("{}", heading);
    for error in errors {
        eprintln!("  - {}", error);
    }
}

fn main() {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);
    let command = cli.command.take().unwrap_or(Commands::List {
        sort: None,
        search: None,
        category: None,
        max_price: None,
        fuel_type: None,
        favorites: false,
        tsv: false,
    });

    // Commands that need neither catalog nor store
    match &command {
        Commands::Init => {
            let path = cli.config.as_ref().map(PathBuf::from);
            if let Err(e) = config::init::run_init_wizard(path) {
                eprintln!("Init failed: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
            std::process::exit(EXIT_SUCCESS);
        }
        Commands::Chat { message, seed } => {
            let message = message.join(" ");
            let seed = (*seed).unwrap_or_else(|| chrono::Utc::now().timestamp_millis().unsigned_abs());
            match car_scout::chat::respond(&message, seed) {
                Some(reply) => println!("{}", reply),
                None => println!("{}", car_scout::chat::greeting()),
            }
            std::process::exit(EXIT_SUCCESS);
        }
        _ => {}
    }

    let config_path = cli.config.as_ref().map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Err(errors) = config::validate_config(&config) {
        print_errors("Config errors:", &errors);
        std::process::exit(EXIT_CONFIG);
    }

    let criteria = match cli.criteria_overrides().apply(config.effective_criteria()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid --fuel: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Err(errors) = scoring::validate_criteria(&criteria) {
        print_errors("Criteria errors:", &errors);
        std::process::exit(EXIT_CONFIG);
    }
    log::debug!(
        "Criteria: budget {}, fuel {}, {} usage, {} priority, {} seats",
        criteria.budget,
        criteria
            .fuel_preference
            .map(|f| f.to_string())
            .unwrap_or_else(|| "any".to_string()),
        criteria.usage,
        criteria.priority,
        criteria.family_size
    );

    let loaded = match config.catalog {
        Some(ref path) => catalog::load_catalog(path),
        None => catalog::builtin_catalog(),
    };
    let vehicles = match loaded {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Catalog error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Err(errors) = catalog::validate_catalog(&vehicles) {
        print_errors("Catalog errors:", &errors);
        std::process::exit(EXIT_CONFIG);
    }

    let store = match store::get_store_path().and_then(|p| FileStore::open(&p)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Store error: {:#}", e);
            std::process::exit(EXIT_STORAGE);
        }
    };
    log::debug!("Using store at {}", store.path().display());

    let mut session = Session {
        config,
        criteria,
        vehicles,
        store,
        use_colors: output::should_use_colors(),
    };

    if let Err(e) = run(&mut session, command) {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code());
    }

    std::process::exit(EXIT_SUCCESS);
}

fn run(session: &mut Session, command: Commands) -> Result<(), CommandError> {
    match command {
        Commands::List {
            sort,
            search,
            category,
            max_price,
            fuel_type,
            favorites,
            tsv,
        } => {
            let filters = SearchFilters {
                search,
                category,
                max_price,
                fuel_type,
                favorites_only: favorites,
            };
            let saved = if favorites {
                store::favorites(&session.store)?
            } else {
                Vec::new()
            };
            let matching = catalog::filter_vehicles(session.vehicles.clone(), &filters, &saved);
            let key = sort.or(session.config.sort).unwrap_or_default();
            let ranking = ranking::rank(&matching, &session.criteria, key);
            session.print_vehicles(&ranking.order, &ranking.scores, tsv);
        }
        Commands::Top { n, tsv } => {
            let n = n.unwrap_or_else(|| session.config.effective_top_n());
            let scores = ranking::score_all(&session.vehicles, &session.criteria);
            let best = ranking::top_n(&session.vehicles, &scores, n);
            session.print_vehicles(&best, &scores, tsv);
        }
        Commands::Show { id } => {
            let vehicle = session.vehicle(&id)?.clone();
            let result = scoring::calculate_score(&vehicle, &session.criteria);
            println!(
                "{}",
                output::format_vehicle_detail(&vehicle, &result, session.use_colors)
            );
            let all_reviews = load_builtin("reviews", reviews::builtin_reviews())?;
            println!();
            println!(
                "{}",
                output::format_review_summary(&reviews::reviews_for(&all_reviews, &vehicle.id))
            );
            store::record_view(&mut session.store, &vehicle.id)?;
        }
        Commands::Fav { action } => run_fav(session, action)?,
        Commands::Compare { action } => run_compare(session, action)?,
        Commands::Recent => {
            let ids = store::recent_views(&session.store)?;
            if ids.is_empty() {
                println!("No recently viewed vehicles.");
                return Ok(());
            }
            let scores = ranking::score_all(&session.vehicles, &session.criteria);
            let recent = session.resolve(&ids);
            session.print_vehicles(&recent, &scores, false);
        }
        Commands::Reviews { id } => {
            let vehicle = session.vehicle(&id)?;
            let all_reviews = load_builtin("reviews", reviews::builtin_reviews())?;
            let found = reviews::reviews_for(&all_reviews, &vehicle.id);
            println!("{}", output::format_review_summary(&found));
            if !found.is_empty() {
                println!();
                println!("{}", output::format_reviews(&found, session.use_colors));
            }
        }
        Commands::Dealers { brands, vehicle } => {
            let mut brands = brands;
            if let Some(id) = vehicle {
                brands.push(session.vehicle(&id)?.brand.clone());
            }
            let directory = load_builtin("dealers", dealers::builtin_dealers())?;
            let found = dealers::dealers_for_brands(&directory, &brands);
            println!("{}", output::format_dealers(&found, session.use_colors));
        }
        Commands::Finance {
            id,
            down,
            trade_in,
            rate,
            months,
        } => {
            let vehicle = session.vehicle(&id)?;
            let down = down.unwrap_or(vehicle.price * DEFAULT_DOWN_PAYMENT_RATIO);
            let loan = car_scout::finance::loan(vehicle.price, down, trade_in, rate, months)
                .map_err(|e| CommandError::Input(e.to_string()))?;
            let lease = car_scout::finance::lease(vehicle.price, down, rate, months)
                .map_err(|e| CommandError::Input(e.to_string()))?;

            println!("{} at {}", vehicle.display_name(), output::format_price(vehicle.price));
            println!("Down payment {}, {:.2}% a year", output::format_price(down), rate);
            println!();
            println!("{}", output::format_loan(&loan, months));
            println!();
            println!("{}", output::format_lease(&lease, months));
        }
        // Handled before the session is built
        Commands::Init | Commands::Chat { .. } => {}
    }
    Ok(())
}

fn run_fav(session: &mut Session, action: FavAction) -> Result<(), CommandError> {
    let limit = session.config.plan.favorites_limit();
    match action {
        FavAction::Add { id } => {
            let id = session.vehicle(&id)?.id.clone();
            if store::add_favorite(&mut session.store, &id, limit)? {
                println!("Added {} to favorites", id);
            } else {
                println!("{} is already a favorite", id);
            }
        }
        FavAction::Remove { id } => {
            if store::remove_favorite(&mut session.store, &id)? {
                println!("Removed {} from favorites", id);
            } else {
                println!("{} was not a favorite", id);
            }
        }
        FavAction::Toggle { id } => {
            let id = session.vehicle(&id)?.id.clone();
            match store::toggle_favorite(&mut session.store, &id, limit)? {
                Toggle::Added => println!("Added {} to favorites", id),
                Toggle::Removed => println!("Removed {} from favorites", id),
            }
        }
        FavAction::List => {
            let ids = store::favorites(&session.store)?;
            if ids.is_empty() {
                println!("No favorites yet.");
                return Ok(());
            }
            let scores = ranking::score_all(&session.vehicles, &session.criteria);
            let saved = session.resolve(&ids);
            session.print_vehicles(&saved, &scores, false);
        }
    }
    Ok(())
}

fn run_compare(session: &mut Session, action: CompareAction) -> Result<(), CommandError> {
    match action {
        CompareAction::Add { id } => {
            let id = session.vehicle(&id)?.id.clone();
            let limit = session.config.plan.comparison_limit();
            if store::add_to_comparison(&mut session.store, &id, limit)? {
                println!("Added {} to comparison", id);
            } else {
                println!("{} is already in the comparison", id);
            }
        }
        CompareAction::Remove { id } => {
            if store::remove_from_comparison(&mut session.store, &id)? {
                println!("Removed {} from comparison", id);
            } else {
                println!("{} was not in the comparison", id);
            }
        }
        CompareAction::Show => {
            let ids = store::comparison(&session.store)?;
            let selected = session.resolve(&ids);
            let scores = ranking::score_all(&session.vehicles, &session.criteria);
            match car_scout::compare::summarize(&selected, &scores) {
                Some(summary) => {
                    let scored = to_scored(&selected, &scores);
                    println!(
                        "{}",
                        output::format_comparison(&scored, &summary, session.use_colors)
                    );
                }
                None => println!("Comparison is empty. Add vehicles with `car-scout compare add <id>`."),
            }
        }
        CompareAction::Clear => {
            store::clear_comparison(&mut session.store)?;
            println!("Comparison cleared");
        }
    }
    Ok(())
}
