use clap::{Parser, Subcommand};
use saarthi::model::{Furnishing, Possession, PropertyType};
use saarthi::sort::SortKey;

#[derive(Parser, Debug)]
#[command(name = "saarthi")]
#[command(about = "Search property listings and manage favorites", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the listings
    #[command(alias = "s")]
    Search {
        /// Free-text query matched against title, city, and description
        #[arg(required = false)]
        query: Option<String>,

        /// City (exact match, e.g. Mumbai)
        #[arg(short, long)]
        city: Option<String>,

        /// Property type (apartment, villa, house, ...)
        #[arg(short = 't', long = "type")]
        property_type: Option<PropertyType>,

        /// Minimum bedrooms ("2" means 2+ BHK); non-numeric input is ignored
        #[arg(short, long)]
        bhk: Option<String>,

        /// Minimum price in whole rupees; non-numeric input is ignored
        #[arg(long)]
        min_price: Option<String>,

        /// Maximum price in whole rupees; non-numeric input is ignored
        #[arg(long)]
        max_price: Option<String>,

        /// Minimum area in sq ft
        #[arg(long)]
        min_area: Option<String>,

        /// Maximum area in sq ft
        #[arg(long)]
        max_area: Option<String>,

        /// Possession status (ready, under-construction, new-launch)
        #[arg(long)]
        possession: Option<Possession>,

        /// Furnishing status (unfurnished, semi-furnished, furnished)
        #[arg(long)]
        furnishing: Option<Furnishing>,

        /// Required amenity; repeat the flag, any match qualifies
        #[arg(short, long = "amenity")]
        amenities: Vec<String>,

        /// Sort order (relevance, price-low, price-high, area-large,
        /// area-small, newest, oldest)
        #[arg(short, long, default_value = "relevance")]
        sort: SortKey,
    },

    /// Show full details for one property
    Show {
        /// Property id
        id: u32,
    },

    /// Toggle a property in your favorites (requires login)
    #[command(alias = "f")]
    Fav {
        /// Property id
        id: u32,
    },

    /// List favorited properties
    #[command(alias = "favs")]
    Favorites {
        /// Sort order for the listing
        #[arg(short, long, default_value = "relevance")]
        sort: SortKey,

        /// Remove all favorites
        #[arg(long)]
        clear: bool,
    },

    /// Store a login session
    Login {
        name: String,
        email: String,
    },

    /// Clear the login session
    Logout,

    /// List the cities offered by search
    Cities,

    /// List the amenities offered by search
    Amenities,
}
