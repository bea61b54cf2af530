mod hero;
mod hero_power;
mod power;
