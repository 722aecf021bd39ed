//! Built-in listings used to initialize an empty store.

use crate::model::Listing;

struct SeedCar {
    id: i64,
    name: &'static str,
    price: f64,
    location: &'static str,
    description: &'static str,
    image: &'static str,
    featured: bool,
    year: &'static str,
    mileage: &'static str,
    fuel: &'static str,
}

const SEED_CARS: [SeedCar; 6] = [
    SeedCar {
        id: 1,
        name: "Toyota Camry 2023",
        price: 28500.0,
        location: "New York, NY",
        description: "Excellent condition Toyota Camry with full service history. Single owner, low mileage. Features include leather seats, sunroof, and advanced safety features.",
        image: "https://images.unsplash.com/photo-1621007947382-bb3c3994e3fb?w=600&h=400&fit=crop",
        featured: true,
        year: "2023",
        mileage: "15,000 miles",
        fuel: "Petrol",
    },
    SeedCar {
        id: 2,
        name: "Honda Civic 2022",
        price: 22000.0,
        location: "Los Angeles, CA",
        description: "Well-maintained Honda Civic in pristine condition. Fuel efficient and great for daily commute. Features include Apple CarPlay, Android Auto, and backup camera.",
        image: "https://images.unsplash.com/photo-1606611013016-969c19ba27bb?w=600&h=400&fit=crop",
        featured: false,
        year: "2022",
        mileage: "25,000 miles",
        fuel: "Petrol",
    },
    SeedCar {
        id: 3,
        name: "BMW 3 Series 2021",
        price: 35000.0,
        location: "Miami, FL",
        description: "Luxury BMW 3 Series in excellent condition. Sport package with premium interior. Features include navigation, heated seats, and parking sensors.",
        image: "https://images.unsplash.com/photo-1555215695-3004980ad54e?w=600&h=400&fit=crop",
        featured: true,
        year: "2021",
        mileage: "30,000 miles",
        fuel: "Petrol",
    },
    SeedCar {
        id: 4,
        name: "Tesla Model 3 2023",
        price: 42000.0,
        location: "San Francisco, CA",
        description: "Latest Tesla Model 3 with full self-driving capability. Low mileage and excellent condition. Includes free supercharging for life.",
        image: "https://images.unsplash.com/photo-1560958089-b8a1929cea89?w=600&h=400&fit=crop",
        featured: true,
        year: "2023",
        mileage: "10,000 miles",
        fuel: "Electric",
    },
    SeedCar {
        id: 5,
        name: "Mercedes C-Class 2020",
        price: 31000.0,
        location: "Chicago, IL",
        description: "Elegant Mercedes C-Class with premium package. Excellent interior and smooth driving experience. Features include ambient lighting and premium sound system.",
        image: "https://images.unsplash.com/photo-1617531653332-bd46c24f2068?w=600&h=400&fit=crop",
        featured: false,
        year: "2020",
        mileage: "40,000 miles",
        fuel: "Petrol",
    },
    SeedCar {
        id: 6,
        name: "Ford Mustang 2022",
        price: 38000.0,
        location: "Dallas, TX",
        description: "Powerful Ford Mustang GT with performance exhaust. Great sound and performance. Features include track apps and Brembo brakes.",
        image: "https://images.unsplash.com/photo-1584345604476-8ec5e12e42dd?w=600&h=400&fit=crop",
        featured: false,
        year: "2022",
        mileage: "20,000 miles",
        fuel: "Petrol",
    },
];

/// The six sample listings, in display order.
pub fn seed_listings() -> Vec<Listing> {
    SEED_CARS
        .iter()
        .map(|car| Listing {
            id: car.id,
            name: car.name.to_string(),
            price: car.price,
            location: car.location.to_string(),
            description: car.description.to_string(),
            image: car.image.to_string(),
            featured: car.featured,
            year: Some(car.year.to_string()),
            mileage: Some(car.mileage.to_string()),
            fuel: Some(car.fuel.to_string()),
            created_at: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_has_six_distinct_listings() {
        let seed = seed_listings();
        assert_eq!(seed.len(), 6);
        let ids: HashSet<_> = seed.iter().map(|l| l.id).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn only_seed_listings_are_featured() {
        let featured: Vec<_> = seed_listings()
            .into_iter()
            .filter(|l| l.featured)
            .map(|l| l.id)
            .collect();
        assert_eq!(featured, vec![1, 3, 4]);
    }
}
