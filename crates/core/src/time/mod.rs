pub mod projection_calendar;
