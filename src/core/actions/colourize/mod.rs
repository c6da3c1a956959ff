pub mod colourize;
