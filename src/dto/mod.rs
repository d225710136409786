pub mod car_dto;

pub use car_dto::{AddCarForm, EditCarForm, IdQuery};
