pub mod checklist_parser;
pub mod checklist_serializer;

pub use checklist_parser::{ParsedLine, parse_checklist, parse_checklist_line};
pub use checklist_serializer::{serialize_checklist, serialize_item};
