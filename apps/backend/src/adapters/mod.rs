pub mod pokemon_sea;
