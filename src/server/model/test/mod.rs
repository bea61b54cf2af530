mod hero_power;
