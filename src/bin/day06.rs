// Copyright (c) 2022 Bastiaan Marinus van de Weerd

advent21::day_main!(day06);
