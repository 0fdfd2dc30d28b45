mod artist;
mod artist_event;
mod event;
mod ticket;
