use async_trait::async_trait;
use chrono::NaiveDate;
use derive_more::{Deref, Display, Error, From};
use serde::{Deserialize, Serialize};

use crate::domain::{DataAccessError, Entity, Id};

/// 予約日の入出力書式(`dd/MM/yyyy`)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// 予約リポジトリ
#[async_trait]
pub trait ReservationRepository {
    /// IDで予約を検索する
    async fn find_by_id(&self, id: ReservationId) -> Result<Option<Reservation>, DataAccessError>;
    /// 予約を保存する
    async fn save(&mut self, entity: &Reservation) -> Result<bool, DataAccessError>;
}

/// 予約ID
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display, From, Deref, Default,
)]
pub struct ReservationId(u64);

impl Id for ReservationId {
    type Inner = u64;
}

/// 部屋番号
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, From, Deref)]
pub struct RoomNumber(u32);

impl RoomNumber {
    /// 作成バッチ内の位置から部屋番号を割り当てる
    pub fn assign(batch_index: usize) -> Self {
        Self(batch_index as u32 + 1)
    }
}

/// 座席番号
#[derive(Clone, Debug, PartialEq, Eq, Display, From, Deref)]
pub struct SeatNumber(String);

impl SeatNumber {
    /// 作成バッチ内の位置から座席番号を割り当てる
    pub fn assign(batch_index: usize) -> Self {
        Self(format!("S{}", 100 + batch_index))
    }
}

/// 予約の種別
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReservationKind {
    /// リゾート予約
    Resort { room_number: RoomNumber },
    /// 鉄道予約
    Railway { seat_number: SeatNumber },
}

/// 予約エンティティ
#[derive(Clone, Debug)]
pub struct Reservation {
    id: ReservationId,
    customer_name: String,
    reservation_date: NaiveDate,
    kind: ReservationKind,
}

impl Reservation {
    pub fn create(
        id: ReservationId,
        customer_name: String,
        reservation_date: NaiveDate,
        kind: ReservationKind,
    ) -> Result<Self, ReservationError> {
        Self::validate_customer_name(&customer_name)?;
        Ok(Reservation {
            id,
            customer_name,
            reservation_date,
            kind,
        })
    }

    /// 顧客名と予約日を書き換える
    pub fn modify(
        &mut self,
        customer_name: String,
        reservation_date: NaiveDate,
    ) -> Result<(), ReservationError> {
        Self::validate_customer_name(&customer_name)?;
        self.customer_name = customer_name;
        self.reservation_date = reservation_date;
        Ok(())
    }

    /// 予約状況の案内文を組み立てる
    pub fn status_message(&self) -> String {
        let date = self.reservation_date.format(DATE_FORMAT);
        match &self.kind {
            ReservationKind::Resort { room_number } => format!(
                "Resort Reservation {} for room number {} is confirmed for {}.",
                self.id, room_number, date
            ),
            ReservationKind::Railway { seat_number } => format!(
                "Railway Reservation {} for seat number {} is confirmed for {}.",
                self.id, seat_number, date
            ),
        }
    }

    /// 種別ごとに割り当てられた番号の案内文を組み立てる
    pub fn assigned_number(&self) -> String {
        match &self.kind {
            ReservationKind::Resort { room_number } => format!("Room Number: {}", room_number),
            ReservationKind::Railway { seat_number } => format!("Seat Number: {}", seat_number),
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn reservation_date(&self) -> NaiveDate {
        self.reservation_date
    }

    pub fn kind(&self) -> &ReservationKind {
        &self.kind
    }

    fn validate_customer_name(customer_name: &str) -> Result<(), ReservationError> {
        match customer_name.trim().is_empty() {
            true => Err(ReservationError::CustomerNameIsBlank),
            false => Ok(()),
        }
    }
}

impl Entity for Reservation {
    type Id = ReservationId;

    const ENTITY_NAME: &'static str = "reservation";

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl PartialEq for Reservation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.customer_name == other.customer_name
            && self.reservation_date == other.reservation_date
            && self.kind == other.kind
    }
}

impl Eq for Reservation {}

/// 予約エラー
#[derive(Error, Display, Debug)]
pub enum ReservationError {
    /// 顧客名が空欄です
    #[display(fmt = "Customer name cannot be blank")]
    CustomerNameIsBlank,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_reservation_create() {
        let entity = Reservation::create(
            1.into(),
            "Alice".to_owned(),
            date("01/01/2030"),
            ReservationKind::Resort {
                room_number: RoomNumber::assign(0),
            },
        )
        .unwrap();
        assert_eq!(entity.id(), ReservationId(1));
        assert_eq!(entity.customer_name(), "Alice");
        assert_eq!(entity.reservation_date(), date("01/01/2030"));
        assert_eq!(
            entity.kind(),
            &ReservationKind::Resort {
                room_number: RoomNumber(1)
            }
        );
    }

    #[test]
    fn test_reservation_create_blank_name() {
        let result = Reservation::create(
            1.into(),
            " ".to_owned(),
            date("01/01/2030"),
            ReservationKind::Resort {
                room_number: RoomNumber::assign(0),
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_status_message() {
        let resort = Reservation::create(
            1.into(),
            "Alice".to_owned(),
            date("01/01/2030"),
            ReservationKind::Resort {
                room_number: RoomNumber::assign(0),
            },
        )
        .unwrap();
        assert_eq!(
            resort.status_message(),
            "Resort Reservation 1 for room number 1 is confirmed for 01/01/2030."
        );

        let railway = Reservation::create(
            2.into(),
            "Bob".to_owned(),
            date("02/02/2030"),
            ReservationKind::Railway {
                seat_number: SeatNumber::assign(1),
            },
        )
        .unwrap();
        assert_eq!(
            railway.status_message(),
            "Railway Reservation 2 for seat number S101 is confirmed for 02/02/2030."
        );
    }

    #[test]
    fn test_modify() {
        let mut entity = Reservation::create(
            1.into(),
            "Alice".to_owned(),
            date("01/01/2030"),
            ReservationKind::Resort {
                room_number: RoomNumber::assign(0),
            },
        )
        .unwrap();
        entity
            .modify("Alicia".to_owned(), date("03/03/2030"))
            .unwrap();
        assert_eq!(entity.customer_name(), "Alicia");
        assert_eq!(entity.reservation_date(), date("03/03/2030"));
        assert_eq!(
            entity.status_message(),
            "Resort Reservation 1 for room number 1 is confirmed for 03/03/2030."
        );
    }

    #[test]
    fn test_modify_blank_name() {
        let mut entity = Reservation::create(
            1.into(),
            "Alice".to_owned(),
            date("01/01/2030"),
            ReservationKind::Resort {
                room_number: RoomNumber::assign(0),
            },
        )
        .unwrap();
        assert!(entity.modify("".to_owned(), date("03/03/2030")).is_err());
        assert_eq!(entity.customer_name(), "Alice");
    }

    #[test]
    fn test_assigned_number() {
        let resort = Reservation::create(
            1.into(),
            "Alice".to_owned(),
            date("01/01/2030"),
            ReservationKind::Resort {
                room_number: RoomNumber::assign(0),
            },
        )
        .unwrap();
        assert_eq!(resort.assigned_number(), "Room Number: 1");

        let railway = Reservation::create(
            2.into(),
            "Bob".to_owned(),
            date("02/02/2030"),
            ReservationKind::Railway {
                seat_number: SeatNumber::assign(1),
            },
        )
        .unwrap();
        assert_eq!(railway.assigned_number(), "Seat Number: S101");
    }

    #[test]
    fn test_room_number_assign() {
        assert_eq!(RoomNumber::assign(0), RoomNumber(1));
        assert_eq!(RoomNumber::assign(4), RoomNumber(5));
    }

    #[test]
    fn test_seat_number_assign() {
        assert_eq!(SeatNumber::assign(0), SeatNumber("S100".to_owned()));
        assert_eq!(SeatNumber::assign(1), SeatNumber("S101".to_owned()));
    }
}
