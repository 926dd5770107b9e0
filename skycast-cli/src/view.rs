//! Terminal rendering of the home header and the weather card.

use anyhow::Result;
use chrono::Local;
use skycast_core::{CardView, WeatherCard, WeatherPayload};

pub fn render_home_header() {
    println!();
    println!("Weather App");
    println!();
}

pub fn render_card(card: &WeatherCard) {
    match card.view() {
        CardView::Loading => println!("Loading..."),
        CardView::NoData => println!("No data found"),
        CardView::Weather(payload) => render_weather(payload),
    }
}

fn render_weather(payload: &WeatherPayload) {
    println!();
    if let Some(condition) = payload.primary() {
        println!("  {}  {}", condition.glyph(), condition.description);
    }
    println!("  {:.2} °C", payload.temperature_celsius());
    println!("  {}, {}", payload.name, payload.sys.country);
    println!("  Humidity: {}%", payload.main.humidity);
    if let Some(condition) = payload.primary() {
        println!("  Icon: {}", condition.icon_url());
    }
    if let Some(observed) = payload.observed_at() {
        println!("  Updated: {}", observed.with_timezone(&Local).format("%Y-%m-%d %H:%M"));
    }
    println!();
}

/// The result view's back action. `true` navigates back to home.
pub fn prompt_back_to_home() -> Result<bool> {
    let back = inquire::Confirm::new("Back to home?").with_default(true).prompt()?;
    Ok(back)
}
