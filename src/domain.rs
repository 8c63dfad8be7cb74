pub mod reservation;

use serde::{Deserialize, Serialize};
use std::{
    error::Error,
    fmt::{Debug, Display},
    ops::Deref,
    str::FromStr,
};
use thiserror::Error;

/// エンティティID
pub trait Id:
    Copy
    + Eq
    + Deref<Target = Self::Inner>
    + From<Self::Inner>
    + Display
    + Debug
    + Serialize
    + for<'de> Deserialize<'de>
{
    type Inner: FromStr;
}

/// エンティティ
pub trait Entity {
    type Id: Id;

    const ENTITY_NAME: &'static str;

    fn id(&self) -> Self::Id;
}

#[derive(Error, Debug)]
pub enum DataAccessError {
    #[error("Data read error: {0}")]
    ReadError(Box<dyn Error>),
    #[error("Data write error: {0}")]
    WriteError(Box<dyn Error>),
    #[error("Client side error: {0}")]
    ClientSideError(Box<dyn Error>),
}

/// IDの発番機
///
/// 発番したIDは呼び出しごとに1ずつ増える。発番してもエンティティを
/// 作成しなかった場合、そのIDは欠番のまま再利用されない。
#[derive(Clone, Debug, Default)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// 次のIDを発番する
    pub fn generate<T>(&mut self) -> T
    where
        T: From<u64>,
    {
        self.last += 1;
        T::from(self.last)
    }
}
