use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use saarthi::api::{CmdMessage, MessageLevel, SaarthiApi};
use saarthi::auth::{AuthSignal, FileSink, Session, User};
use saarthi::catalog::{StaticCatalog, AMENITIES, CITIES};
use saarthi::config::SaarthiConfig;
use saarthi::error::Result;
use saarthi::favorites::fs::FileBackend;
use saarthi::favorites::FavoritesStore;
use saarthi::filter::{parse_bound, parse_count, FilterState};
use saarthi::model::{Furnishing, Possession, PropertyRecord, PropertyType};
use saarthi::sort::SortKey;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: SaarthiApi<StaticCatalog, FileBackend>,
    session: Session,
    config: SaarthiConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    if let Some(warning) = ctx.api.favorites_load_warning() {
        eprintln!("{}", warning.yellow());
    }

    match cli.command {
        Some(Commands::Search {
            query,
            city,
            property_type,
            bhk,
            min_price,
            max_price,
            min_area,
            max_area,
            possession,
            furnishing,
            amenities,
            sort,
        }) => handle_search(
            &ctx,
            SearchArgs {
                query,
                city,
                property_type,
                bhk,
                min_price,
                max_price,
                min_area,
                max_area,
                possession,
                furnishing,
                amenities,
                sort,
            },
        ),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Fav { id }) => handle_fav(&mut ctx, id),
        Some(Commands::Favorites { sort, clear }) => handle_favorites(&mut ctx, sort, clear),
        Some(Commands::Login { name, email }) => handle_login(&mut ctx, name, email),
        Some(Commands::Logout) => handle_logout(&mut ctx),
        Some(Commands::Cities) => {
            for city in CITIES {
                println!("{}", city);
            }
            Ok(())
        }
        Some(Commands::Amenities) => {
            for amenity in AMENITIES {
                println!("{}", amenity);
            }
            Ok(())
        }
        None => handle_search(&ctx, SearchArgs::default()),
    }
}

fn init_context() -> Result<AppContext> {
    // SAARTHI_HOME overrides the platform data dir (used by tests).
    let data_dir = match std::env::var_os("SAARTHI_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "saarthi", "saarthi")
            .expect("Could not determine data dir")
            .data_dir()
            .to_path_buf(),
    };

    let config = SaarthiConfig::load(&data_dir).unwrap_or_default();
    let session = Session::new(config.user.clone());

    let backend = FileBackend::new(data_dir.clone());
    let mut favorites = FavoritesStore::open(backend);
    // Interaction tracking only runs for a logged-in session, and its
    // failures never surface.
    if session.is_authenticated() {
        let sink = FileSink::new(data_dir.join("interactions.jsonl"));
        favorites = favorites.with_sink(Box::new(sink));
    }

    let api = SaarthiApi::new(StaticCatalog::seed(), favorites);

    Ok(AppContext {
        api,
        session,
        config,
        data_dir,
    })
}

#[derive(Default)]
struct SearchArgs {
    query: Option<String>,
    city: Option<String>,
    property_type: Option<PropertyType>,
    bhk: Option<String>,
    min_price: Option<String>,
    max_price: Option<String>,
    min_area: Option<String>,
    max_area: Option<String>,
    possession: Option<Possession>,
    furnishing: Option<Furnishing>,
    amenities: Vec<String>,
    sort: SortKey,
}

fn build_filters(args: &SearchArgs) -> FilterState {
    let mut filters = FilterState::new()
        .with_property_type(args.property_type)
        .with_min_bedrooms(args.bhk.as_deref().and_then(parse_count))
        .with_price_range(
            args.min_price.as_deref().and_then(parse_bound),
            args.max_price.as_deref().and_then(parse_bound),
        )
        .with_area_range(
            args.min_area.as_deref().and_then(parse_bound),
            args.max_area.as_deref().and_then(parse_bound),
        )
        .with_possession(args.possession)
        .with_furnishing(args.furnishing)
        .with_amenities(args.amenities.clone());

    if let Some(query) = &args.query {
        filters = filters.with_search_query(query.clone());
    }
    if let Some(city) = &args.city {
        filters = filters.with_location(city.clone());
    }
    filters
}

fn handle_search(ctx: &AppContext, args: SearchArgs) -> Result<()> {
    let filters = build_filters(&args);
    let result = ctx.api.search(&filters, args.sort)?;

    println!(
        "{}",
        format!("Properties ({} results found)", result.listed_properties.len()).bold()
    );
    print_properties(ctx, &result.listed_properties);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: u32) -> Result<()> {
    let result = ctx.api.view(id)?;
    for record in &result.listed_properties {
        print_property_details(ctx, record);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_fav(ctx: &mut AppContext, id: u32) -> Result<()> {
    if !ctx.session.is_authenticated() {
        println!("{}", "Please login to save favorites".yellow());
        return Ok(());
    }
    // The property must exist before we persist its id.
    ctx.api.view(id)?;

    let result = ctx.api.toggle_favorite(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_favorites(ctx: &mut AppContext, sort: SortKey, clear: bool) -> Result<()> {
    if clear {
        let result = ctx.api.clear_favorites()?;
        print_messages(&result.messages);
        return Ok(());
    }

    let result = ctx.api.favorites(sort)?;
    if result.listed_properties.is_empty() {
        println!("No favorites yet!");
        return Ok(());
    }
    println!(
        "{}",
        format!("Favorites ({})", result.listed_properties.len()).bold()
    );
    print_properties(ctx, &result.listed_properties);
    Ok(())
}

fn handle_login(ctx: &mut AppContext, name: String, email: String) -> Result<()> {
    let user = User { name, email };
    let banner = format!("Logged in as {} <{}>", user.name, user.email);
    ctx.config.login(user);
    ctx.config.save(&ctx.data_dir)?;
    println!("{}", banner.green());
    Ok(())
}

fn handle_logout(ctx: &mut AppContext) -> Result<()> {
    ctx.config.logout();
    ctx.config.save(&ctx.data_dir)?;
    println!("Logged out");
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const PRICE_WIDTH: usize = 10;
const FAV_MARKER: &str = "❤";

fn print_properties(ctx: &AppContext, properties: &[PropertyRecord]) {
    if properties.is_empty() {
        println!("No properties found. Try adjusting your search criteria.");
        return;
    }

    for record in properties {
        let fav_prefix = if ctx.api.is_favorite(record.id) {
            format!("{} ", FAV_MARKER.red())
        } else {
            "  ".to_string()
        };

        let summary = format!(
            "{} · {} · {} BHK · {} sq ft · {}",
            record.location,
            record.property_type,
            record.bedrooms,
            record.area,
            record.furnishing,
        );

        let id_str = format!("{:>3}. ", record.id);
        let price = format!("{:>width$}", format_price(record.price), width = PRICE_WIDTH);

        let fixed = id_str.width() + 2 + PRICE_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title_line = format!("{} - {}", record.title, summary);
        let title_display = truncate_to_width(&title_line, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "{}{}{}{}{}",
            fav_prefix,
            id_str,
            title_display,
            " ".repeat(padding),
            price.bold(),
        );
    }
}

fn print_property_details(ctx: &AppContext, record: &PropertyRecord) {
    let fav_suffix = if ctx.api.is_favorite(record.id) {
        format!(" {}", FAV_MARKER.red())
    } else {
        String::new()
    };
    println!("{}{}", record.title.bold(), fav_suffix);
    println!("--------------------------------");
    println!("{:<12}{}", "Price:", format_price(record.price).bold());
    println!("{:<12}{}", "Location:", record.location);
    println!("{:<12}{}", "Address:", record.address);
    println!("{:<12}{}", "Type:", record.property_type);
    println!("{:<12}{}", "Possession:", record.possession);
    println!("{:<12}{}", "Furnishing:", record.furnishing);
    println!(
        "{:<12}{} bed · {} bath · {} garage",
        "Rooms:", record.bedrooms, record.bathrooms, record.garages
    );
    println!("{:<12}{} sq ft", "Area:", record.area);
    println!("{:<12}{}", "Built:", record.year_built);
    if let Some(developer) = &record.developer {
        println!("{:<12}{}", "Developer:", developer);
    }
    if !record.amenities.is_empty() {
        println!("{:<12}{}", "Amenities:", record.amenities.join(", "));
    }
    println!();
    println!("{}", record.description.dimmed());
}

/// ₹2.5Cr / ₹85L / ₹900K, matching the listing UI's price badges.
fn format_price(price: u64) -> String {
    if price >= 10_000_000 {
        format!("₹{:.1}Cr", price as f64 / 10_000_000.0)
    } else if price >= 100_000 {
        format!("₹{:.0}L", price as f64 / 100_000.0)
    } else {
        format!("₹{:.0}K", price as f64 / 1_000.0)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
