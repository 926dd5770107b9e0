//! Navigation loop: Home ⇄ Result, driven by query strings.
//!
//! Every screen change goes through a query string and
//! [`route::select_screen`], so the CLI follows the same three-state routing
//! the query contract defines: home (no parameters), city result, or
//! coordinate result.

use anyhow::Result;
use skycast_core::{
    Config, IpLocator, Locator, QueryState, Screen, WeatherCard, WeatherClient, WeatherTarget,
    route, select_screen,
};

use crate::view;

/// Prompt for the provider API key and store it in the config file.
pub fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()?;
    config.set_api_key(api_key);
    config.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}

fn client() -> Result<WeatherClient> {
    let config = Config::load()?;
    let api_key = config.resolve_api_key()?;
    WeatherClient::new(api_key)
}

/// Non-interactive entry: show one result screen and exit.
pub async fn run_once(query: String) -> Result<()> {
    let client = client()?;
    show_result(&client, &query).await;
    Ok(())
}

/// Interactive session. Starts at home and keeps navigating until the user
/// quits; the back action always returns to the bare home query.
pub async fn run_interactive() -> Result<()> {
    let client = client()?;
    let locator = IpLocator::new()?;

    let mut query = route::home_query();
    loop {
        tracing::debug!(query, "navigate");
        match select_screen(&QueryState::parse(&query)) {
            Screen::Home => match home_view(&locator).await? {
                Some(next) => query = next,
                None => break,
            },
            _ => {
                show_result(&client, &query).await;
                if !view::prompt_back_to_home()? {
                    break;
                }
                query = route::home_query();
            }
        }
    }

    Ok(())
}

/// The home screen: collect a city name, or trigger one geolocation request.
/// Returns the next query string, or `None` to quit.
async fn home_view(locator: &dyn Locator) -> Result<Option<String>> {
    const SEARCH_CITY: &str = "Search by city name";
    const USE_LOCATION: &str = "Use my location";
    const QUIT: &str = "Quit";

    view::render_home_header();

    let choice =
        inquire::Select::new("What would you like to do?", vec![SEARCH_CITY, USE_LOCATION, QUIT])
            .prompt()?;

    match choice {
        SEARCH_CITY => {
            let city = inquire::Text::new("Enter city name:").prompt()?;
            let city = city.trim();
            if city.is_empty() {
                // An empty submit navigates to `city=`, which routes home.
                return Ok(Some(route::home_query()));
            }
            Ok(Some(route::city_query(city)))
        }
        USE_LOCATION => {
            println!("Fetching your location...");
            match locator.current_position().await {
                Ok(position) => Ok(Some(route::coords_query(
                    &position.latitude.to_string(),
                    &position.longitude.to_string(),
                ))),
                Err(err) => {
                    tracing::debug!("geolocation failed: {err}");
                    eprintln!("{}", err.user_message());
                    Ok(Some(route::home_query()))
                }
            }
        }
        _ => Ok(None),
    }
}

/// The result screen: one fetch per navigation, loading shown for its whole
/// span, then either the weather card or "No data found".
async fn show_result(client: &WeatherClient, query: &str) {
    let target = match select_screen(&QueryState::parse(query)) {
        Screen::CityResult { city } => WeatherTarget::City(city),
        Screen::CoordResult { latitude, longitude } => {
            WeatherTarget::Coords { latitude, longitude }
        }
        // Nothing to fetch without a city or a complete coordinate pair.
        Screen::Home => return,
    };

    let mut card = WeatherCard::new();
    let token = card.begin();
    view::render_card(&card);

    let outcome = client.fetch(&target).await;
    card.settle(token, outcome);
    view::render_card(&card);
}
