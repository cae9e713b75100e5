mod map_dto;

pub use map_dto::{MapMarkerDto, MapViewDto, MarkerKind};
