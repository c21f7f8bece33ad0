//! Demo walkthrough of the rental domain: seeds a small fleet, runs a
//! booking through its whole lifecycle and opens a maintenance record.
//! Reads configuration from TOML (~/.config/rental-service/config.toml).

use rust_decimal::Decimal;
use tracing::{error, info};

use rental_service::{
    default_config_path, AppConfig, MaintenanceKind, NewUser, RentalService, VehicleKind,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("RENTAL_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
        }
    }

    info!("Starting rental service demo...");
    let service = RentalService::new();

    // ── Users ──────────────────────────────────────────────────
    service.register_user(NewUser::Administrator {
        name: "Laura".to_string(),
        email: "laura@example.com".to_string(),
        credential: "admin-secret".to_string(),
    })?;
    let carlos = service.register_user(NewUser::Customer {
        name: "Carlos".to_string(),
        email: "carlos@example.com".to_string(),
        credential: "secret".to_string(),
        license: "B1234567".to_string(),
        address: "12 Galicia Ave".to_string(),
    })?;
    let ana = service.register_user(NewUser::Customer {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        credential: "secret".to_string(),
        license: "B7654321".to_string(),
        address: "22 Barcelona St".to_string(),
    })?;

    // ── Branches and fleet ─────────────────────────────────────
    let downtown = service.add_branch("Downtown", "45 Angel St", "981 000 123")?;
    let north = service.add_branch("North", "99 Finisterre Ave", "981 123 456")?;

    let corolla = service.register_vehicle(
        "1234ABC",
        "Toyota",
        "Corolla",
        2021,
        "Compact",
        Decimal::from(25_000),
        VehicleKind::Car {
            doors: 5,
            engine_type: "Petrol".to_string(),
        },
        downtown.id,
    )?;
    let mt07 = service.register_vehicle(
        "5678XYZ",
        "Yamaha",
        "MT-07",
        2022,
        "Motorcycle",
        Decimal::from(8_000),
        VehicleKind::Motorcycle { displacement_cc: 700 },
        downtown.id,
    )?;
    let transit = service.register_vehicle(
        "9999KLM",
        "Ford",
        "Transit",
        2020,
        "Cargo",
        Decimal::from(60_000),
        VehicleKind::Van {
            cargo_capacity_kg: Decimal::from(800),
        },
        north.id,
    )?;

    // ── Rates ──────────────────────────────────────────────────
    service.create_rate(
        "Compact rate",
        "Compact",
        Decimal::from(45),
        Decimal::from(300),
        Decimal::new(15, 2),
        Decimal::from(25),
        Decimal::from(40),
    )?;
    service.create_rate(
        "Motorcycle rate",
        "Motorcycle",
        Decimal::from(30),
        Decimal::from(200),
        Decimal::new(10, 2),
        Decimal::from(15),
        Decimal::from(25),
    )?;
    service.create_rate(
        "Cargo rate",
        "Cargo",
        Decimal::from(60),
        Decimal::from(400),
        Decimal::new(20, 2),
        Decimal::from(30),
        Decimal::from(50),
    )?;

    info!("Available vehicles:");
    for vehicle in service.list_available_vehicles() {
        info!("  {}", vehicle);
    }

    // ── Bookings ───────────────────────────────────────────────
    let booking1 = service.create_booking(carlos.id, corolla.id, "2025-11-01", "2025-11-05", north.id)?;
    info!("  {}", booking1);
    let booking2 = service.create_booking(ana.id, mt07.id, "2025-11-02", "2025-11-03", downtown.id)?;
    info!("  {}", booking2);

    // Return with extra mileage, a day of delay and the tank short.
    let summary = service.finalize_booking(booking1.id, Decimal::from(650), 1, false, "Card")?;
    info!("Payment summary: {}", serde_json::to_string_pretty(&summary)?);

    // ── Maintenance ────────────────────────────────────────────
    let record = service.register_maintenance(
        transit.id,
        "Oil change and general check",
        "2025-11-06",
        "2025-11-07",
        Decimal::new(7550, 2),
        MaintenanceKind::Inspection,
    )?;
    info!("  {}", record);
    service.finalize_maintenance(record.id)?;

    info!("Final vehicle states:");
    for id in [corolla.id, mt07.id, transit.id] {
        info!("  {}", service.vehicle(id)?);
    }

    Ok(())
}
