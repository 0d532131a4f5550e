//! One-shot command dispatch

use anyhow::{bail, Result};

use crate::actions::feed::{feed_items, filter_feed, format_age, FeedCategory};
use crate::actions::galaxy::{join_galaxy, GALAXIES};
use crate::actions::missions::mission_offers;
use crate::actions::shipyard::{upgrade_cost, ShipStat, RENAME_COST};
use crate::actions::trade::COMMODITIES;
use crate::actions::{
    bank, format_credits, navigation, shipyard, trade, ActionError, ActionResult, Notice,
};
use crate::cli::Commands;
use crate::model::{sector_number, ProfileUpdate};
use crate::session::Session;
use crate::storage::KeyValueStore;
use crate::ui::Ui;

/// Run `command` against `session`, reporting through `ui`.
///
/// A rejected action is shown through `ui` and then returned as an
/// [`ActionError`] inside the error. `Play` needs a terminal and is handled
/// by the binary.
pub fn run<S: KeyValueStore>(
    session: &mut Session<S>,
    command: &Commands,
    ui: &mut impl Ui,
) -> Result<()> {
    match command {
        Commands::Status => print_status(session, ui),

        Commands::SignIn { email, password } => {
            if !session.identity.sign_in(email, password) {
                bail!("Could not save the profile");
            }
            let name = session
                .identity
                .user()
                .map(|u| u.display_name.clone())
                .unwrap_or_default();
            ui.notify(&Notice::new("Signed In", format!("Welcome back, {}.", name)));
        }

        Commands::SignUp {
            email,
            display_name,
            password,
        } => {
            if !session.identity.sign_up(email, password, display_name) {
                bail!("Could not save the profile");
            }
            ui.notify(&Notice::new(
                "Account Created",
                format!("Welcome, {}. Pick a galaxy with `join`.", display_name),
            ));
        }

        Commands::SignOut => {
            if !session.identity.sign_out() {
                bail!("Could not remove the saved profile");
            }
            ui.notify(&Notice::new("Signed Out", "See you among the stars."));
        }

        Commands::Profile {
            display_name,
            email,
        } => {
            let update = ProfileUpdate {
                display_name: display_name.clone(),
                email: email.clone(),
                galaxy_id: None,
            };
            if update.is_empty() {
                print_status(session, ui);
            } else if session.identity.update_profile(&update) {
                ui.notify(&Notice::new("Profile Updated", "Your profile has been saved."));
            } else if !session.identity.is_signed_in() {
                bail!("Sign in before editing the profile");
            } else {
                bail!("Could not save the profile");
            }
        }

        Commands::Galaxies => {
            for galaxy in GALAXIES {
                ui.log(format!(
                    "{:<16} {:<16} {:<9} {:>6} players  {:<6}  {}",
                    galaxy.id,
                    galaxy.name,
                    galaxy.kind.as_str(),
                    format_credits(galaxy.players as u64),
                    galaxy.difficulty,
                    galaxy.description
                ));
            }
            ui.log("Joining a galaxy binds your progress to that instance. Choose carefully!");
        }

        Commands::Join { galaxy } => {
            let result = join_galaxy(&mut session.identity, &mut session.game, galaxy);
            report(ui, result)?;
        }

        Commands::NewGame => {
            session.game.initialize_game();
            ui.notify(&Notice::new(
                "New Game",
                "Your ship is fueled and waiting at Stardock Alpha.",
            ));
        }

        Commands::Move { sector } => report(ui, navigation::warp(&mut session.game, sector))?,
        Commands::Scan => report(ui, navigation::scan(&mut session.game))?,
        Commands::Dock => report(ui, navigation::dock(&mut session.game))?,

        Commands::Market => {
            for c in COMMODITIES {
                ui.log(format!(
                    "{:<10} buy {:>4} CR  sell {:>4} CR  stock {}",
                    c.name,
                    c.price,
                    c.sale_price(),
                    format_credits(c.stock)
                ));
            }
        }

        Commands::Buy { commodity } => report(ui, trade::buy(&mut session.game, commodity))?,
        Commands::Sell { commodity } => report(ui, trade::sell(&mut session.game, commodity))?,
        Commands::Deposit { amount } => report(ui, bank::deposit(&mut session.game, amount))?,
        Commands::Withdraw { amount } => report(ui, bank::withdraw(&mut session.game, amount))?,

        Commands::Ship => match session.game.ship() {
            Some(ship) => {
                ui.log(format!("{} ({}) [{}]", ship.name, ship.class_label(), ship.status));
                for stat in ShipStat::ALL {
                    let level = stat.value(ship);
                    ui.log(format!(
                        "  {:<12} {:>4}   upgrade {} CR",
                        stat.label(),
                        level,
                        format_credits(upgrade_cost(level))
                    ));
                }
                ui.log(format!("  Rename: {} CR", format_credits(RENAME_COST)));
            }
            None => ui.log("No ship data available."),
        },

        Commands::Upgrade { stat } => report(ui, shipyard::upgrade(&mut session.game, stat))?,
        Commands::Rename { name } => report(ui, shipyard::rename(&mut session.game, name))?,

        Commands::Missions => {
            for m in mission_offers() {
                ui.log(format!(
                    "{}  {} [{}] Tier {}  {} | {} | {} min",
                    m.id,
                    m.title,
                    m.faction,
                    m.tier.as_str(),
                    m.kind,
                    m.region,
                    m.time_limit
                ));
                ui.log(format!("    {}", m.description));
                ui.log(format!("    {}", m.reward_summary()));
            }
        }

        Commands::Feed { filter } => {
            let category = match filter.as_deref().map(str::parse::<FeedCategory>).transpose() {
                Ok(category) => category,
                Err(err) => return report(ui, Err(err)),
            };
            let items = feed_items();
            for item in filter_feed(&items, category) {
                ui.log(format!(
                    "[{}] {} ({}, {}) {}",
                    item.severity.as_str(),
                    item.category.label(),
                    item.region,
                    format_age(item.minutes_ago),
                    item.message
                ));
            }
        }

        Commands::ResetTurns => {
            session.game.reset_turns();
            ui.notify(&Notice::new(
                "Turns Reset",
                format!("You have {} turns.", session.game.turns()),
            ));
        }

        Commands::Play => bail!("The interactive shell needs a terminal"),
    }

    Ok(())
}

/// Show the outcome, then fail the command if the action was rejected
fn report(ui: &mut impl Ui, result: ActionResult) -> Result<()> {
    ui.report(&result);
    result.map(|_| ()).map_err(ActionError::into)
}

fn print_status<S: KeyValueStore>(session: &Session<S>, ui: &mut impl Ui) {
    ui.log(format!("Status: {}", session.route()));

    match session.identity.user() {
        Some(user) => {
            ui.log(format!(
                "Pilot:  {} <{}>",
                user.display_name,
                user.email.as_deref().unwrap_or("no email")
            ));
            ui.log(format!(
                "Galaxy: {}",
                user.galaxy_id.as_deref().unwrap_or("none")
            ));
        }
        None => ui.log("Pilot:  not signed in"),
    }

    let game = &session.game;
    if let Some(sector) = game.current_sector() {
        let mut features = Vec::new();
        if sector.has_port {
            features.push("port".to_string());
        }
        if sector.has_planet {
            features.push("planet".to_string());
        }
        if sector.players > 0 {
            features.push(format!("{} players", sector.players));
        }
        ui.log(format!(
            "Sector: {} ({}) {}",
            sector.name,
            sector.region,
            features.join(", ")
        ));
        let exits: Vec<&str> = sector
            .connected_sectors
            .iter()
            .map(|id| sector_number(id))
            .collect();
        ui.log(format!("Exits:  {}", exits.join(", ")));
    }

    let bank = game.player().map(|p| p.bank).unwrap_or(0);
    ui.log(format!(
        "Turns:  {}   Credits: {} CR   Bank: {} CR",
        game.turns(),
        format_credits(game.credits()),
        format_credits(bank)
    ));
    if game.is_initialized() && game.turns() == 0 {
        ui.log("Out of turns! Turns reset daily at 00:00 UTC.");
    }
}
