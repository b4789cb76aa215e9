use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "resv-cli")]
#[command(about = "Command line client for the reservation platform APIs")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// Data source mode: live or mock
    #[arg(long, global = true, env = "API_MODE")]
    pub mode: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Authentication commands
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Restaurant bookings and table availability
    Restaurant {
        #[command(subcommand)]
        command: RestaurantCommands,
    },
    /// Hotel rooms and stays
    Hotel {
        #[command(subcommand)]
        command: HotelCommands,
    },
    /// Real estate listings
    Property {
        #[command(subcommand)]
        command: PropertyCommands,
    },
    /// Overview of featured properties, rooms and your bookings
    Home,
}

#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Login to the reservation platform
    Login,
    /// Create a new account
    Signup,
    /// Logout and clear the session
    Logout,
    /// Show authentication status
    Status,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum RestaurantCommands {
    /// List your bookings
    Bookings,
    /// Show one booking
    Booking {
        /// Booking ID
        id: u64,
    },
    /// Check table availability for a slot
    Tables {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time (HH:MM)
        #[arg(long)]
        time: String,
    },
    /// Book a table
    Book {
        /// Restaurant ID
        #[arg(long)]
        restaurant: u64,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time (HH:MM)
        #[arg(long)]
        time: String,
        /// Party size
        #[arg(long, default_value = "2")]
        party_size: u64,
        /// Special requests
        #[arg(long)]
        requests: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum HotelCommands {
    /// List hotel rooms
    Rooms,
    /// Show one room
    Room {
        /// Room ID
        id: u64,
    },
    /// Check room availability for a stay
    Available {
        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: String,
        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        check_out: String,
    },
    /// List your hotel bookings
    Bookings,
    /// Book a room
    Book {
        /// Hotel ID
        #[arg(long)]
        hotel: u64,
        /// Room ID
        #[arg(long)]
        room: u64,
        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: String,
        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        check_out: String,
        /// Number of guests
        #[arg(long, default_value = "2")]
        guests: u64,
    },
}

#[derive(Subcommand, Debug)]
pub enum PropertyCommands {
    /// Show featured properties
    Featured,
    /// List properties with optional filters
    List {
        /// Property type (villa, apartment, commercial, ...)
        #[arg(long)]
        property_type: Option<String>,
        /// Listing type: sale or rent
        #[arg(long)]
        listing_type: Option<String>,
        /// City filter (substring match)
        #[arg(long)]
        city: Option<String>,
        /// Minimum price
        #[arg(long)]
        min_price: Option<u64>,
        /// Maximum price
        #[arg(long)]
        max_price: Option<u64>,
    },
    /// Show one property
    Show {
        /// Property ID
        id: u64,
    },
    /// Submit an inquiry or offer for a property
    Inquire {
        /// Property ID
        #[arg(long)]
        property: u64,
        /// Listing type: inquiry, offer, visit
        #[arg(long, default_value = "inquiry")]
        listing_type: String,
        /// Offer price
        #[arg(long)]
        offer_price: Option<u64>,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
}
