mod hero;
