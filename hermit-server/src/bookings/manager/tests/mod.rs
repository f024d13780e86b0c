use super::*;
use crate::db::DbService;
use crate::db::models::{GuestCreate, RoomCreate, RoomStatus, RoomTypeCreate, RoomUpdate};
use chrono::{Duration, NaiveDate};
use rust_decimal_macros::dec;

mod test_core;
mod test_lifecycle;
mod test_update;

const TZ: Tz = chrono_tz::Europe::Madrid;

/// In-memory hotel with one double room (rate 100/night, max occupancy 2)
/// and one registered guest.
struct TestHotel {
    manager: BookingManager,
    rooms: RoomRepository,
    bookings: BookingRepository,
    guest: RecordId,
    room: RecordId,
}

async fn setup() -> TestHotel {
    let db = DbService::new_in_memory().await.unwrap().db;

    let room_types = RoomTypeRepository::new(db.clone());
    let double = room_types
        .create(RoomTypeCreate {
            name: "Double".to_string(),
            base_price: dec!(100),
            max_occupancy: 2,
            amenities: vec!["wifi".to_string()],
        })
        .await
        .unwrap();

    let rooms = RoomRepository::new(db.clone());
    let room = rooms
        .create(RoomCreate {
            number: "101".to_string(),
            room_type: double.id.unwrap(),
            floor: 1,
            notes: None,
        })
        .await
        .unwrap();

    let guests = GuestRepository::new(db.clone());
    let guest = guests
        .create(GuestCreate {
            name: "Ada Lovelace".to_string(),
            email: Some("ada@example.com".to_string()),
            phone: None,
            id_document: None,
            notes: None,
        })
        .await
        .unwrap();

    TestHotel {
        bookings: BookingRepository::new(db.clone()),
        manager: BookingManager::new(db, TZ),
        rooms,
        guest: guest.id.unwrap(),
        room: room.id.unwrap(),
    }
}

/// Today in the business timezone, shifted by `days`
fn day(days: i64) -> NaiveDate {
    today(TZ) + Duration::days(days)
}

/// Stay request: `days_from_now` nights from today+offset, 2 adults
fn stay(hotel: &TestHotel, from: i64, nights: i64) -> BookingCreate {
    BookingCreate {
        guest: hotel.guest.clone(),
        room: hotel.room.clone(),
        check_in: day(from),
        check_out: day(from + nights),
        adults: 2,
        children: 0,
        special_requests: None,
        created_by: None,
    }
}

/// Create + confirm in one go (the common "paid booking" fixture)
async fn confirmed_stay(hotel: &TestHotel, from: i64, nights: i64) -> Booking {
    let booking = hotel.manager.create(stay(hotel, from, nights)).await.unwrap();
    hotel
        .manager
        .confirm(&booking.id.clone().unwrap().to_string())
        .await
        .unwrap()
}

fn id_of(booking: &Booking) -> String {
    booking.id.clone().unwrap().to_string()
}

fn room_id_of(hotel: &TestHotel) -> String {
    hotel.room.to_string()
}

async fn room_status(hotel: &TestHotel) -> RoomStatus {
    hotel
        .rooms
        .find_by_id(&room_id_of(hotel))
        .await
        .unwrap()
        .unwrap()
        .status
}

/// Staff-side room status change (maintenance/cleaning)
async fn set_room_status(hotel: &TestHotel, status: RoomStatus) {
    hotel
        .rooms
        .update(
            &room_id_of(hotel),
            RoomUpdate {
                status: Some(status),
                ..Default::default()
            },
        )
        .await
        .unwrap();
}
