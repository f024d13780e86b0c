use super::*;

#[tokio::test]
async fn extending_the_stay_recomputes_total() {
    let hotel = setup().await;
    let booking = hotel.manager.create(stay(&hotel, 1, 3)).await.unwrap();
    assert_eq!(booking.total_amount, dec!(300));

    let updated = hotel
        .manager
        .update(
            &id_of(&booking),
            BookingUpdate {
                check_out: Some(day(6)), // 3 → 5 nights
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.total_amount, dec!(500));
    assert_eq!(updated.check_in, day(1));
}

#[tokio::test]
async fn occupancy_change_is_checked_against_capacity() {
    let hotel = setup().await;
    let booking = hotel.manager.create(stay(&hotel, 1, 3)).await.unwrap();

    let err = hotel
        .manager
        .update(
            &id_of(&booking),
            BookingUpdate {
                children: Some(2), // 2 adults + 2 children > max 2
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::CapacityExceeded(_)));

    let reloaded = hotel.manager.get(&id_of(&booking)).await.unwrap();
    assert_eq!(reloaded.children, 0);

    // Overflowing counts must also land in CapacityExceeded, never wrap
    let err = hotel
        .manager
        .update(
            &id_of(&booking),
            BookingUpdate {
                adults: Some(u32::MAX),
                children: Some(1),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::CapacityExceeded(_)));
}

#[tokio::test]
async fn special_requests_change_keeps_dates_and_total() {
    let hotel = setup().await;
    let booking = hotel.manager.create(stay(&hotel, 1, 3)).await.unwrap();

    let updated = hotel
        .manager
        .update(
            &id_of(&booking),
            BookingUpdate {
                special_requests: Some("Late arrival, around 23:00".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.special_requests.as_deref(), Some("Late arrival, around 23:00"));
    assert_eq!(updated.total_amount, dec!(300));
    assert_eq!(updated.check_in, booking.check_in);
}

#[tokio::test]
async fn update_can_confirm_but_not_check_in() {
    let hotel = setup().await;
    let booking = hotel.manager.create(stay(&hotel, 1, 3)).await.unwrap();

    let confirmed = hotel
        .manager
        .update(
            &id_of(&booking),
            BookingUpdate {
                status: Some(BookingStatus::Confirmed),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(confirmed.status, BookingStatus::Confirmed);

    // check_in is reserved for the dedicated operation (date rule, room sync)
    let err = hotel
        .manager
        .update(
            &id_of(&booking),
            BookingUpdate {
                status: Some(BookingStatus::CheckedIn),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::IllegalTransition(_)));
}

#[tokio::test]
async fn terminal_bookings_cannot_be_modified() {
    let hotel = setup().await;
    let booking = hotel.manager.create(stay(&hotel, 1, 3)).await.unwrap();
    hotel.manager.cancel(&id_of(&booking)).await.unwrap();

    let err = hotel
        .manager
        .update(
            &id_of(&booking),
            BookingUpdate {
                adults: Some(1),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::IllegalOperation(_)));
}

#[tokio::test]
async fn stay_write_misses_when_status_moved_underneath() {
    let hotel = setup().await;
    let booking = hotel.manager.create(stay(&hotel, 1, 3)).await.unwrap();
    let record = booking.id.clone().unwrap();

    // The write is guarded on the status its caller last observed; here the
    // booking is pending, so a write expecting `confirmed` must land nothing.
    let missed = hotel
        .bookings
        .update_stay(
            &record,
            BookingStatus::Confirmed,
            BookingStatus::Confirmed,
            day(2),
            day(6),
            1,
            0,
            dec!(400),
            None,
            0,
        )
        .await
        .unwrap();
    assert!(missed.is_none());

    let reloaded = hotel.manager.get(&id_of(&booking)).await.unwrap();
    assert_eq!(reloaded.check_in, day(1));
    assert_eq!(reloaded.check_out, day(4));
    assert_eq!(reloaded.adults, 2);
    assert_eq!(reloaded.total_amount, dec!(300));
    assert_eq!(reloaded.status, BookingStatus::Pending);
}

#[tokio::test]
async fn date_change_on_past_dates_is_rejected() {
    let hotel = setup().await;
    let booking = hotel.manager.create(stay(&hotel, 1, 3)).await.unwrap();

    let err = hotel
        .manager
        .update(
            &id_of(&booking),
            BookingUpdate {
                check_in: Some(day(-2)),
                check_out: Some(day(1)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));
}
