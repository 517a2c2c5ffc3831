//! Data Transfer Objects (DTOs)
//!
//! Read-only, display-ready views of the order ticket.

mod order_ticket_dto;

pub use order_ticket_dto::{OrderTicketDto, TargetRowDto};
