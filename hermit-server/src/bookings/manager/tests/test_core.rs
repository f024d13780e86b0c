use super::*;

#[tokio::test]
async fn create_starts_pending_with_computed_total() {
    let hotel = setup().await;

    // 3 nights at 100/night
    let booking = hotel.manager.create(stay(&hotel, 1, 3)).await.unwrap();

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.total_amount, dec!(300));
    assert!(booking.number.starts_with("BK"));
    assert_eq!(booking.adults, 2);

    // Room untouched until check-in
    assert_eq!(room_status(&hotel).await, RoomStatus::Available);
}

#[tokio::test]
async fn create_rejects_inverted_or_empty_date_range() {
    let hotel = setup().await;

    let mut inverted = stay(&hotel, 3, 2);
    inverted.check_out = day(1);
    let err = hotel.manager.create(inverted).await.unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));

    // Zero-night stay is equally invalid
    let mut empty = stay(&hotel, 2, 1);
    empty.check_out = empty.check_in;
    let err = hotel.manager.create(empty).await.unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));
}

#[tokio::test]
async fn create_rejects_past_check_in() {
    let hotel = setup().await;

    let err = hotel.manager.create(stay(&hotel, -1, 3)).await.unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));
}

#[tokio::test]
async fn create_rejects_party_over_max_occupancy() {
    let hotel = setup().await;

    let mut request = stay(&hotel, 1, 2);
    request.adults = 2;
    request.children = 1; // 3 > max_occupancy 2
    let err = hotel.manager.create(request).await.unwrap_err();
    assert!(matches!(err, BookingError::CapacityExceeded(_)));
}

#[tokio::test]
async fn create_rejects_absurd_guest_counts_without_wrapping() {
    let hotel = setup().await;

    // adults + children would overflow u32; must fail capacity, not wrap to 0
    let mut request = stay(&hotel, 1, 2);
    request.adults = u32::MAX;
    request.children = 1;
    let err = hotel.manager.create(request).await.unwrap_err();
    assert!(matches!(err, BookingError::CapacityExceeded(_)));
}

#[tokio::test]
async fn create_rejects_zero_adults() {
    let hotel = setup().await;

    let mut request = stay(&hotel, 1, 2);
    request.adults = 0;
    request.children = 1;
    let err = hotel.manager.create(request).await.unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));
}

#[tokio::test]
async fn create_rejects_unknown_guest_and_room() {
    let hotel = setup().await;

    let mut request = stay(&hotel, 1, 2);
    request.guest = "guest:nobody".parse().unwrap();
    let err = hotel.manager.create(request).await.unwrap_err();
    assert!(matches!(err, BookingError::NotFound(_)));

    let mut request = stay(&hotel, 1, 2);
    request.room = "room:nowhere".parse().unwrap();
    let err = hotel.manager.create(request).await.unwrap_err();
    assert!(matches!(err, BookingError::NotFound(_)));
}

#[tokio::test]
async fn pending_bookings_hold_no_inventory() {
    let hotel = setup().await;

    // Two unpaid requests for the same dates may coexist; the first one to
    // confirm claims the room.
    let first = hotel.manager.create(stay(&hotel, 1, 3)).await.unwrap();
    let second = hotel.manager.create(stay(&hotel, 1, 3)).await.unwrap();
    assert_ne!(first.number, second.number);

    hotel.manager.confirm(&id_of(&first)).await.unwrap();
    let err = hotel.manager.confirm(&id_of(&second)).await.unwrap_err();
    assert!(matches!(err, BookingError::RoomUnavailable(_)));
}

#[tokio::test]
async fn list_filters_by_status() {
    let hotel = setup().await;

    let first = hotel.manager.create(stay(&hotel, 1, 2)).await.unwrap();
    confirmed_stay(&hotel, 5, 2).await;

    let pending = hotel
        .manager
        .list(&BookingFilter {
            status: Some(BookingStatus::Pending),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].number, first.number);

    let all = hotel.manager.list(&BookingFilter::default()).await.unwrap();
    assert_eq!(all.len(), 2);
}
