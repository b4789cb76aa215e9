use crate::api::models::PropertyFilters;
use crate::cli::main_types::{
    AuthCommands, Commands, ConfigCommands, HotelCommands, PropertyCommands, RestaurantCommands,
};
use crate::core::auth::{LoginInput, SignupInput};
use crate::core::facade::{ApiMode, BookingApi};
use crate::display::table::TableDisplay;
use crate::error::{AppError, CliError};
use crate::storage::config::{Config, Profile};
use crate::utils::validation;
use serde_json::{Value, json};
use std::path::PathBuf;

pub struct Dispatcher {
    api: BookingApi,
    config: Config,
    config_path: Option<PathBuf>,
    profile_name: String,
    display: TableDisplay,
    verbose: bool,
}

impl Dispatcher {
    pub fn new(
        api: BookingApi,
        config: Config,
        config_path: Option<PathBuf>,
        profile_name: String,
        verbose: bool,
    ) -> Self {
        Self {
            api,
            config,
            config_path,
            profile_name,
            display: TableDisplay::new(),
            verbose,
        }
    }

    fn log_verbose(&self, msg: &str) {
        if self.verbose {
            println!("Verbose: {}", msg);
        }
    }

    fn pretty(value: &Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    }

    fn require_auth(&self) -> Result<String, AppError> {
        self.api.stored_token().ok_or_else(|| {
            AppError::Cli(CliError::AuthRequired {
                message: "You are not logged in".to_string(),
                hint: "Run 'resv-cli auth login' first".to_string(),
            })
        })
    }

    pub async fn dispatch(&mut self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Auth { command } => self.handle_auth_command(command).await,
            Commands::Config { command } => self.handle_config_command(command).await,
            Commands::Restaurant { command } => self.handle_restaurant_command(command).await,
            Commands::Hotel { command } => self.handle_hotel_command(command).await,
            Commands::Property { command } => self.handle_property_command(command).await,
            Commands::Home => self.handle_home_command().await,
        }
    }

    async fn handle_auth_command(&self, commands: AuthCommands) -> Result<(), AppError> {
        match commands {
            AuthCommands::Login => {
                self.log_verbose("Attempting auth login command");
                let input = LoginInput::collect()?;
                input.validate()?;

                let response = self.api.login(&input.email, &input.password).await?;
                if response.success {
                    let name = response
                        .user
                        .map(|user| user.full_name)
                        .unwrap_or_else(|| input.email.clone());
                    println!("✅ Successfully logged in as {}", name);
                    Ok(())
                } else {
                    let message = response
                        .message
                        .unwrap_or_else(|| "Login failed".to_string());
                    println!("❌ Login failed: {}", message);
                    Err(AppError::Cli(CliError::AuthRequired {
                        message,
                        hint: "Check your email and password and try again".to_string(),
                    }))
                }
            }
            AuthCommands::Signup => {
                self.log_verbose("Attempting auth signup command");
                let input = SignupInput::collect()?;
                input.validate()?;

                let response = self
                    .api
                    .signup(&input.full_name, &input.email, &input.password, &input.phone)
                    .await?;
                if response.success {
                    println!("✅ Account created for {}", input.email);
                    Ok(())
                } else {
                    let message = response
                        .message
                        .unwrap_or_else(|| "Signup failed".to_string());
                    println!("❌ Signup failed: {}", message);
                    Err(AppError::Cli(CliError::InvalidArguments(message)))
                }
            }
            AuthCommands::Logout => {
                self.log_verbose("Attempting auth logout command");
                self.api.logout().await?;
                println!(
                    "✅ Successfully logged out from profile: {}",
                    self.profile_name
                );
                Ok(())
            }
            AuthCommands::Status => {
                self.log_verbose("Attempting auth status command");

                println!("Authentication Status:");
                println!("=====================");
                println!("Profile: {}", self.profile_name);
                println!("Mode: {}", self.api.mode());

                match self.api.stored_user() {
                    Some(user) => {
                        println!("Logged in:");
                        println!("{}", self.display.render_user(&user)?);
                    }
                    None if self.api.stored_token().is_some() => {
                        println!("Logged in (no profile snapshot stored)");
                    }
                    None => {
                        println!("Not logged in. Run 'resv-cli auth login' to authenticate.");
                    }
                }
                Ok(())
            }
        }
    }

    async fn handle_config_command(&mut self, commands: ConfigCommands) -> Result<(), AppError> {
        match commands {
            ConfigCommands::Show => {
                self.log_verbose("Attempting config show command");

                println!("Current Configuration:");
                println!("=====================");

                if let Some(default_profile) = &self.config.default_profile {
                    println!("Default Profile: {}", default_profile);
                } else {
                    println!("Default Profile: (not set)");
                }

                println!("\nProfiles:");
                if self.config.profiles.is_empty() {
                    println!("  No profiles configured");
                } else {
                    for (name, profile) in &self.config.profiles {
                        println!("  [{}]", name);
                        println!("    API URL: {}", profile.api_url);
                        if let Some(timeout) = profile.timeout_seconds {
                            println!("    Timeout: {} seconds", timeout);
                        }
                        if let Some(mode) = &profile.mode {
                            println!("    Mode: {}", mode);
                        }
                    }
                }
                Ok(())
            }
            ConfigCommands::Set { key, value } => {
                self.log_verbose(&format!(
                    "Attempting config set - key: {}, value: {}",
                    key, value
                ));
                self.apply_config_set(&key, &value)?;
                self.config.save(self.config_path.clone())?;
                println!("✅ Updated {} for profile: {}", key, self.profile_name);
                Ok(())
            }
        }
    }

    fn apply_config_set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        if key == "default_profile" {
            self.config.default_profile = Some(value.to_string());
            return Ok(());
        }

        let profile = self
            .config
            .profiles
            .entry(self.profile_name.clone())
            .or_insert_with(|| Profile {
                api_url: String::new(),
                timeout_seconds: None,
                mode: None,
            });

        match key {
            "api_url" => {
                validation::validate_url(value)?;
                profile.api_url = value.to_string();
            }
            "timeout_seconds" => {
                let seconds: u64 = value.parse().map_err(|_| {
                    AppError::Cli(CliError::InvalidArguments(format!(
                        "timeout_seconds must be a number, got '{}'",
                        value
                    )))
                })?;
                profile.timeout_seconds = Some(seconds);
            }
            "mode" => {
                let mode: ApiMode = value
                    .parse()
                    .map_err(|e: String| AppError::Cli(CliError::InvalidArguments(e)))?;
                profile.mode = Some(mode.to_string());
            }
            other => {
                return Err(AppError::Cli(CliError::InvalidArguments(format!(
                    "Unknown configuration key '{}' (expected default_profile, api_url, timeout_seconds or mode)",
                    other
                ))));
            }
        }
        Ok(())
    }

    async fn handle_restaurant_command(
        &self,
        commands: RestaurantCommands,
    ) -> Result<(), AppError> {
        match commands {
            RestaurantCommands::Bookings => {
                self.log_verbose("Attempting restaurant bookings command");
                let envelope = self.api.get_bookings().await;
                println!("{}", self.display.render_bookings(&envelope.data)?);
                Ok(())
            }
            RestaurantCommands::Booking { id } => {
                self.log_verbose(&format!("Attempting restaurant booking command - ID: {}", id));
                let envelope = self.api.get_booking_by_id(id).await;
                println!("{}", Self::pretty(&envelope.data));
                Ok(())
            }
            RestaurantCommands::Tables { date, time } => {
                self.log_verbose(&format!(
                    "Attempting restaurant tables command - date: {}, time: {}",
                    date, time
                ));
                validation::validate_date(&date, "date")?;
                validation::validate_time(&time, "time")?;

                let envelope = self.api.get_available_tables(&date, &time).await?;
                println!("{}", self.display.render_table_availability(&envelope.data)?);
                Ok(())
            }
            RestaurantCommands::Book {
                restaurant,
                date,
                time,
                party_size,
                requests,
            } => {
                self.log_verbose(&format!(
                    "Attempting restaurant book command - restaurant: {}",
                    restaurant
                ));
                self.require_auth()?;
                validation::validate_date(&date, "date")?;
                validation::validate_time(&time, "time")?;
                validation::validate_party_size(party_size)?;

                let payload = json!({
                    "restaurantId": restaurant,
                    "bookingDate": date,
                    "bookingTime": time,
                    "partySize": party_size,
                    "specialRequests": requests.unwrap_or_default(),
                });
                let envelope = self.api.create_booking(payload).await?;
                println!(
                    "✅ {}",
                    envelope.message.as_deref().unwrap_or("Booking created")
                );
                println!("{}", Self::pretty(&envelope.data));
                Ok(())
            }
        }
    }

    async fn handle_hotel_command(&self, commands: HotelCommands) -> Result<(), AppError> {
        match commands {
            HotelCommands::Rooms => {
                self.log_verbose("Attempting hotel rooms command");
                let envelope = self.api.get_rooms().await;
                println!("{}", self.display.render_hotels(&envelope.data)?);
                Ok(())
            }
            HotelCommands::Room { id } => {
                self.log_verbose(&format!("Attempting hotel room command - ID: {}", id));
                let envelope = self.api.get_room_by_id(id).await;
                println!("{}", Self::pretty(&envelope.data));
                Ok(())
            }
            HotelCommands::Available {
                check_in,
                check_out,
            } => {
                self.log_verbose(&format!(
                    "Attempting hotel available command - {} to {}",
                    check_in, check_out
                ));
                validation::validate_check_in_out(&check_in, &check_out)?;

                let envelope = self.api.get_available_rooms(&check_in, &check_out).await?;
                println!("{}", self.display.render_hotels(&envelope.data)?);
                Ok(())
            }
            HotelCommands::Bookings => {
                self.log_verbose("Attempting hotel bookings command");
                let envelope = self.api.get_hotel_bookings().await?;
                println!("{}", self.display.render_bookings(&envelope.data)?);
                Ok(())
            }
            HotelCommands::Book {
                hotel,
                room,
                check_in,
                check_out,
                guests,
            } => {
                self.log_verbose(&format!(
                    "Attempting hotel book command - hotel: {}, room: {}",
                    hotel, room
                ));
                self.require_auth()?;
                validation::validate_check_in_out(&check_in, &check_out)?;
                validation::validate_party_size(guests)?;

                let user = self.api.stored_user();
                let payload = json!({
                    "hotelId": hotel,
                    "roomId": room,
                    "checkInDate": check_in,
                    "checkOutDate": check_out,
                    "numberOfGuests": guests,
                    "guestName": user.as_ref().map(|u| u.full_name.clone()),
                    "guestEmail": user.as_ref().map(|u| u.email.clone()),
                    "guestPhone": user.as_ref().map(|u| u.phone.clone()),
                });
                let envelope = self.api.create_hotel_booking(payload).await?;
                println!(
                    "✅ {}",
                    envelope.message.as_deref().unwrap_or("Booking created")
                );
                println!("{}", Self::pretty(&envelope.data));
                Ok(())
            }
        }
    }

    async fn handle_property_command(&self, commands: PropertyCommands) -> Result<(), AppError> {
        match commands {
            PropertyCommands::Featured => {
                self.log_verbose("Attempting property featured command");
                let envelope = self.api.get_featured_properties().await?;
                println!("{}", self.display.render_properties(&envelope.data)?);
                Ok(())
            }
            PropertyCommands::List {
                property_type,
                listing_type,
                city,
                min_price,
                max_price,
            } => {
                self.log_verbose("Attempting property list command");
                let filters = PropertyFilters {
                    property_type,
                    listing_type,
                    city,
                    min_price,
                    max_price,
                };
                let envelope = self.api.get_properties(&filters).await;
                println!("{}", self.display.render_properties(&envelope.data)?);
                Ok(())
            }
            PropertyCommands::Show { id } => {
                self.log_verbose(&format!("Attempting property show command - ID: {}", id));
                let envelope = self.api.get_property_by_id(id).await;
                println!("{}", Self::pretty(&envelope.data));
                Ok(())
            }
            PropertyCommands::Inquire {
                property,
                listing_type,
                offer_price,
                notes,
            } => {
                self.log_verbose(&format!(
                    "Attempting property inquire command - property: {}",
                    property
                ));
                self.require_auth()?;

                let user = self.api.stored_user();
                let payload = json!({
                    "propertyId": property,
                    "listingType": listing_type,
                    "offerPrice": offer_price,
                    "notes": notes,
                    "customerInfo": user.map(|u| json!({
                        "name": u.full_name,
                        "email": u.email,
                        "phone": u.phone,
                    })),
                });
                let envelope = self.api.create_property_listing(payload).await?;
                println!(
                    "✅ {}",
                    envelope.message.as_deref().unwrap_or("Inquiry submitted")
                );
                println!("{}", Self::pretty(&envelope.data));
                Ok(())
            }
        }
    }

    /// Overview screen: the three sections load concurrently and each
    /// failure is reported on its own, so one broken endpoint never
    /// blanks the whole view.
    async fn handle_home_command(&self) -> Result<(), AppError> {
        self.log_verbose("Attempting home command");

        let (featured, rooms, bookings) = futures::join!(
            self.api.get_featured_properties(),
            self.api.get_rooms(),
            self.api.get_bookings(),
        );

        println!("Featured Properties");
        println!("===================");
        match featured {
            Ok(envelope) => println!("{}", self.display.render_properties(&envelope.data)?),
            Err(e) => println!("⚠️  Could not load featured properties: {}", e.display_friendly()),
        }

        println!("\nHotel Rooms");
        println!("===========");
        println!("{}", self.display.render_hotels(&rooms.data)?);

        println!("\nYour Bookings");
        println!("=============");
        println!("{}", self.display.render_bookings(&bookings.data)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::session::SessionStore;

    fn create_test_dispatcher() -> Dispatcher {
        let mut config = Config::default();
        config.default_profile = Some("test".to_string());
        config.set_profile(
            "test".to_string(),
            Profile {
                api_url: "http://example.test/api".to_string(),
                timeout_seconds: Some(15),
                mode: Some("mock".to_string()),
            },
        );
        let api = BookingApi::mock(SessionStore::in_memory());
        Dispatcher::new(api, config, None, "test".to_string(), true)
    }

    #[tokio::test]
    async fn test_auth_status_without_session() {
        let d = create_test_dispatcher();
        let result = d.handle_auth_command(AuthCommands::Status).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_config_show() {
        let mut d = create_test_dispatcher();
        let result = d.handle_config_command(ConfigCommands::Show).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_config_set_rejects_unknown_key() {
        let mut d = create_test_dispatcher();
        let result = d.apply_config_set("nope", "value");
        assert!(matches!(
            result,
            Err(AppError::Cli(CliError::InvalidArguments(_)))
        ));
    }

    #[tokio::test]
    async fn test_config_set_mode_validates() {
        let mut d = create_test_dispatcher();
        assert!(d.apply_config_set("mode", "mock").is_ok());
        assert!(d.apply_config_set("mode", "sideways").is_err());
        assert_eq!(
            d.config.get_profile("test").unwrap().mode.as_deref(),
            Some("mock")
        );
    }

    #[tokio::test]
    async fn test_restaurant_book_requires_auth() {
        let d = create_test_dispatcher();
        let result = d
            .handle_restaurant_command(RestaurantCommands::Book {
                restaurant: 1,
                date: "2024-06-01".to_string(),
                time: "19:00".to_string(),
                party_size: 2,
                requests: None,
            })
            .await;
        assert!(matches!(
            result,
            Err(AppError::Cli(CliError::AuthRequired { .. }))
        ));
    }

    #[tokio::test]
    async fn test_hotel_book_sends_hotel_and_room_ids() {
        let store = SessionStore::in_memory();
        store.store_session("demo-token", None);
        let mut config = Config::default();
        config.default_profile = Some("test".to_string());
        let api = BookingApi::mock(store);
        let d = Dispatcher::new(api, config, None, "test".to_string(), false);

        let result = d
            .handle_hotel_command(HotelCommands::Book {
                hotel: 3,
                room: 2,
                check_in: "2024-04-01".to_string(),
                check_out: "2024-04-03".to_string(),
                guests: 2,
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_restaurant_bookings_renders() {
        let d = create_test_dispatcher();
        let result = d
            .handle_restaurant_command(RestaurantCommands::Bookings)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_home_fans_out() {
        let d = create_test_dispatcher();
        let result = d.handle_home_command().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_property_list_with_filters() {
        let d = create_test_dispatcher();
        let result = d
            .handle_property_command(PropertyCommands::List {
                property_type: None,
                listing_type: Some("sale".to_string()),
                city: None,
                min_price: None,
                max_price: None,
            })
            .await;
        assert!(result.is_ok());
    }
}
