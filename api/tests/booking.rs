use adapter::database::{model::room::sample_catalog, Database};
use api::{
    handler::{
        command::run_command,
        reservation::{reserve_room, show_reservation_list},
        room::{show_available_rooms, show_room_list},
    },
    model::{
        command::{BookingCommand, BookingCommandResponse},
        reservation::CreateReservationRequest,
    },
};
use kernel::model::{
    id::RoomId,
    room::{event::CreateRoom, RoomCategory},
};
use registry::AppRegistry;
use rust_decimal_macros::dec;
use shared::error::AppError;

fn request(guest: &str, category: &str, check_in: &str, check_out: &str) -> CreateReservationRequest {
    serde_json::from_value(serde_json::json!({
        "guestName": guest,
        "category": category,
        "checkIn": check_in,
        "checkOut": check_out,
    }))
    .expect("valid request")
}

fn room_numbers(registry: &AppRegistry, category: &str) -> anyhow::Result<Vec<i32>> {
    Ok(show_available_rooms(registry, category)?
        .items
        .iter()
        .map(|r| r.room_id.raw())
        .collect())
}

#[test]
fn two_standard_rooms_then_not_available() -> anyhow::Result<()> {
    let db = Database::new(
        vec![
            CreateRoom::new(RoomId::new(100), RoomCategory::Standard, dec!(100)),
            CreateRoom::new(RoomId::new(101), RoomCategory::Standard, dec!(100)),
            CreateRoom::new(RoomId::new(2), RoomCategory::Deluxe, dec!(150)),
            CreateRoom::new(RoomId::new(201), RoomCategory::Deluxe, dec!(150)),
        ],
        1,
    )?;
    let registry = AppRegistry::new(db);

    let first = reserve_room(&registry, request("Alice", "standard", "2024-01-01", "2024-01-04"))?;
    assert_eq!(first.room.room_id, RoomId::new(100));
    assert_eq!(first.total_amount, dec!(300));
    assert_eq!(
        first.to_string(),
        "Reservation ID: 1, Guest Name: Alice, Room: 100, Check-in: 2024-01-01, Check-out: 2024-01-04, Total Amount: $300.00"
    );

    let second = reserve_room(&registry, request("Bob", "Standard", "2024-02-10", "2024-02-11"))?;
    assert_eq!(second.room.room_id, RoomId::new(101));
    assert_eq!(second.reservation_id.raw(), 2);
    assert!(room_numbers(&registry, "STANDARD")?.is_empty());

    let third = reserve_room(&registry, request("Carol", "sTaNdArD", "2024-03-01", "2024-03-02"));
    match third {
        Err(e @ AppError::NotAvailable { .. }) => {
            assert_eq!(e.to_string(), "No available rooms in the sTaNdArD category.")
        }
        other => panic!("expected NotAvailable, got {other:?}"),
    }

    assert_eq!(room_numbers(&registry, "deluxe")?, vec![2, 201]);
    let ledger = show_reservation_list(&registry)?;
    assert_eq!(ledger.items.len(), 2);
    Ok(())
}

#[test]
fn ledger_and_catalog_views_follow_insertion_order() -> anyhow::Result<()> {
    let registry = AppRegistry::new(Database::new(sample_catalog(), 1)?);
    assert!(show_reservation_list(&registry)?.items.is_empty());

    reserve_room(&registry, request("Alice", "Suite", "2024-06-01", "2024-06-03"))?;
    reserve_room(&registry, request("Bob", "Deluxe", "2024-06-02", "2024-06-02"))?;

    let ledger = show_reservation_list(&registry)?;
    let guests: Vec<&str> = ledger.items.iter().map(|r| r.guest_name.as_str()).collect();
    assert_eq!(guests, vec!["Alice", "Bob"]);
    assert_eq!(ledger.items[0].total_amount, dec!(400));
    assert_eq!(ledger.items[1].total_amount, dec!(0));
    assert_eq!(ledger.items[1].room.category, "Deluxe");

    let catalog = show_room_list(&registry)?;
    let reserved: Vec<i32> = catalog
        .items
        .iter()
        .filter(|r| !r.is_available)
        .map(|r| r.room_id.raw())
        .collect();
    assert_eq!(reserved, vec![201, 301]);
    assert_eq!(
        catalog.items[0].to_string(),
        "Room Number: 101, Category: Standard, Price per night: $100.00"
    );
    Ok(())
}

#[test]
fn responses_serialize_in_camel_case() -> anyhow::Result<()> {
    let registry = AppRegistry::new(Database::new(sample_catalog(), 1)?);
    let res = reserve_room(&registry, request("Alice", "deluxe", "2024-01-04", "2024-01-01"))?;

    let json = serde_json::to_value(&res)?;
    assert_eq!(json["reservationId"], 1);
    assert_eq!(json["guestName"], "Alice");
    assert_eq!(json["checkIn"], "2024-01-04");
    assert_eq!(json["room"]["roomId"], 201);
    assert_eq!(json["totalAmount"], "450.00");
    Ok(())
}

fn command(json: &str) -> BookingCommand {
    serde_json::from_str(json).expect("valid command")
}

#[test]
fn search_command_renders_available_rooms() -> anyhow::Result<()> {
    let registry = AppRegistry::new(Database::new(sample_catalog(), 1)?);

    let res = run_command(&registry, command(r#"{"search": "deluxe"}"#))?;
    assert_eq!(
        res.to_string(),
        "Available rooms:\n\
         Room Number: 201, Category: Deluxe, Price per night: $150.00\n\
         Room Number: 202, Category: Deluxe, Price per night: $150.00"
    );

    let res = run_command(&registry, command(r#"{"search": "Penthouse"}"#))?;
    assert!(matches!(res, BookingCommandResponse::AvailableRooms { ref rooms, .. } if rooms.items.is_empty()));
    assert_eq!(res.to_string(), "No available rooms in the Penthouse category.");
    Ok(())
}

#[test]
fn reserve_command_turns_not_available_into_a_message() -> anyhow::Result<()> {
    let registry = AppRegistry::new(Database::new(sample_catalog(), 1)?);
    let reserve = |guest: &str| {
        command(&format!(
            r#"{{"guestName": "{guest}", "category": "suite", "checkIn": "2024-01-01", "checkOut": "2024-01-02"}}"#
        ))
    };

    let first = run_command(&registry, reserve("Alice"))?;
    assert_eq!(
        first.to_string(),
        "Reservation successful!\n\
         Reservation ID: 1, Guest Name: Alice, Room: 301, Check-in: 2024-01-01, Check-out: 2024-01-02, Total Amount: $200.00"
    );
    run_command(&registry, reserve("Bob"))?;

    let third = run_command(&registry, reserve("Carol"))?;
    assert!(matches!(third, BookingCommandResponse::NotAvailable { .. }));
    assert_eq!(
        third.to_string(),
        "No available rooms in the suite category for the specified dates."
    );

    let res = run_command(&registry, command(r#"{"search": "SUITE"}"#))?;
    assert_eq!(res.to_string(), "No available rooms in the SUITE category.");
    Ok(())
}

#[test]
fn list_commands_render_catalog_and_ledger() -> anyhow::Result<()> {
    let registry = AppRegistry::new(Database::new(sample_catalog(), 1)?);

    let ledger = run_command(&registry, command(r#"{"list": "reservations"}"#))?;
    assert_eq!(ledger.to_string(), "No reservations found.");

    reserve_room(&registry, request("Alice", "Standard", "2024-01-01", "2024-01-04"))?;
    let ledger = run_command(&registry, command(r#"{"list": "reservations"}"#))?;
    assert_eq!(
        ledger.to_string(),
        "All reservations:\n\
         Reservation ID: 1, Guest Name: Alice, Room: 101, Check-in: 2024-01-01, Check-out: 2024-01-04, Total Amount: $300.00"
    );

    let rooms = run_command(&registry, command(r#"{"list": "rooms"}"#))?;
    let BookingCommandResponse::Rooms(rooms) = rooms else {
        panic!("expected the room list");
    };
    assert_eq!(rooms.items.len(), 6);
    assert!(!rooms.items[0].is_available);
    Ok(())
}
