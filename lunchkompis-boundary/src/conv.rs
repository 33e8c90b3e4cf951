use super::*;
use lunchkompis_entities as e;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Invalid rating {rating} of restaurant '{id}'")]
    Rating { id: String, rating: f64 },
    #[error("Invalid price {price} of menu item '{id}'")]
    Price { id: String, price: f64 },
    #[error("Invalid opening hours '{start} - {end}'")]
    Hours { start: String, end: String },
    #[error("Invalid coordinates ({lat}, {lng})")]
    Coordinates { lat: f64, lng: f64 },
    #[error("Missing or blank id")]
    Id,
}

fn parse_id(id: String) -> Result<e::id::Id, ConversionError> {
    let id = e::id::Id::from(id);
    if id.is_valid() {
        Ok(id)
    } else {
        Err(ConversionError::Id)
    }
}

fn tags(from: Vec<Tag>) -> Vec<e::tag::Tag> {
    from.into_iter().map(|Tag { name }| name.into()).collect()
}

fn tag_dtos(from: Vec<e::tag::Tag>) -> Vec<Tag> {
    from.into_iter().map(|t| Tag { name: t.name }).collect()
}

fn image_urls(from: Vec<Image>) -> Vec<String> {
    from.into_iter().map(|Image { url }| url).collect()
}

fn image_dtos(from: Vec<String>) -> Vec<Image> {
    from.into_iter().map(|url| Image { url }).collect()
}

impl TryFrom<City> for e::city::City {
    type Error = ConversionError;
    fn try_from(from: City) -> Result<Self, Self::Error> {
        let City { id, name } = from;
        Ok(Self {
            id: parse_id(id)?,
            name,
        })
    }
}

impl From<e::city::City> for City {
    fn from(from: e::city::City) -> Self {
        Self {
            id: from.id.into(),
            name: from.name,
        }
    }
}

impl TryFrom<Coordinate> for e::geo::MapPoint {
    type Error = ConversionError;
    fn try_from(from: Coordinate) -> Result<Self, Self::Error> {
        let Coordinate { lat, lng } = from;
        e::geo::MapPoint::try_from_lat_lng_deg(lat, lng)
            .ok_or(ConversionError::Coordinates { lat, lng })
    }
}

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        Self {
            lat: from.lat_deg(),
            lng: from.lng_deg(),
        }
    }
}

impl TryFrom<Location> for e::location::Location {
    type Error = ConversionError;
    fn try_from(from: Location) -> Result<Self, Self::Error> {
        let Location {
            address,
            zip,
            city,
            coordinates,
        } = from;
        let pos = coordinates.map(TryInto::try_into).transpose()?;
        Ok(Self {
            pos,
            address: e::address::Address {
                street: address,
                zip,
                city,
            },
        })
    }
}

impl From<e::location::Location> for Location {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location { pos, address } = from;
        let e::address::Address { street, zip, city } = address;
        Self {
            address: street,
            zip,
            city,
            coordinates: pos.map(Into::into),
        }
    }
}

impl TryFrom<OpeningHours> for e::time::OpeningHours {
    type Error = ConversionError;
    fn try_from(from: OpeningHours) -> Result<Self, Self::Error> {
        let OpeningHours {
            start_time,
            end_time,
            day,
        } = from;
        match (start_time.parse(), end_time.parse()) {
            (Ok(start), Ok(end)) => Ok(Self { start, end, day }),
            _ => Err(ConversionError::Hours {
                start: start_time,
                end: end_time,
            }),
        }
    }
}

impl From<e::time::OpeningHours> for OpeningHours {
    fn from(from: e::time::OpeningHours) -> Self {
        let e::time::OpeningHours { start, end, day } = from;
        Self {
            start_time: start.to_string(),
            end_time: end.to_string(),
            day,
        }
    }
}

impl From<Contact> for e::contact::Contact {
    fn from(from: Contact) -> Self {
        let Contact {
            phone,
            website,
            email,
        } = from;
        Self {
            phone,
            website,
            email,
        }
    }
}

impl From<e::contact::Contact> for Contact {
    fn from(from: e::contact::Contact) -> Self {
        let e::contact::Contact {
            phone,
            website,
            email,
        } = from;
        Self {
            phone,
            website,
            email,
        }
    }
}

impl TryFrom<LunchMenuItem> for e::menu::LunchMenuItem {
    type Error = ConversionError;
    fn try_from(from: LunchMenuItem) -> Result<Self, Self::Error> {
        let LunchMenuItem {
            id,
            name,
            description,
            price,
            images,
            tags: item_tags,
            allergens,
        } = from;
        let checked_price = e::price::Price::from(price);
        if !checked_price.is_valid() {
            return Err(ConversionError::Price { id, price });
        }
        Ok(Self {
            id: parse_id(id)?,
            name,
            description,
            price: checked_price,
            tags: tags(item_tags),
            allergens: tags(allergens),
            images: image_urls(images),
        })
    }
}

impl From<e::menu::LunchMenuItem> for LunchMenuItem {
    fn from(from: e::menu::LunchMenuItem) -> Self {
        let e::menu::LunchMenuItem {
            id,
            name,
            description,
            price,
            tags,
            allergens,
            images,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            price: price.into(),
            images: image_dtos(images),
            tags: tag_dtos(tags),
            allergens: tag_dtos(allergens),
        }
    }
}

impl From<LunchInclude> for e::menu::Extra {
    fn from(from: LunchInclude) -> Self {
        e::menu::Extra::from_name(&from.name)
    }
}

impl From<e::menu::Extra> for LunchInclude {
    fn from(from: e::menu::Extra) -> Self {
        Self {
            name: from.name().to_owned(),
        }
    }
}

impl TryFrom<LunchMenu> for e::menu::LunchMenu {
    type Error = ConversionError;
    fn try_from(from: LunchMenu) -> Result<Self, Self::Error> {
        let LunchMenu {
            id,
            name,
            description,
            lunch_menu_items,
            lunch_includes,
        } = from;
        let items = lunch_menu_items
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<_, _>>()?;
        Ok(Self {
            id: parse_id(id)?,
            name,
            description,
            items,
            extras: lunch_includes.into_iter().map(Into::into).collect(),
        })
    }
}

impl From<e::menu::LunchMenu> for LunchMenu {
    fn from(from: e::menu::LunchMenu) -> Self {
        let e::menu::LunchMenu {
            id,
            name,
            description,
            items,
            extras,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            lunch_menu_items: items.into_iter().map(Into::into).collect(),
            lunch_includes: extras.into_iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<Restaurant> for e::restaurant::Restaurant {
    type Error = ConversionError;
    fn try_from(from: Restaurant) -> Result<Self, Self::Error> {
        let Restaurant {
            id,
            name,
            cuisines,
            features,
            rating,
            images,
            location,
            hours,
            lunch_menus,
            contact,
            popular_dishes,
        } = from;
        let checked_rating = e::rating::Rating::from(rating);
        if !checked_rating.is_valid() {
            return Err(ConversionError::Rating { id, rating });
        }
        let location = location.map(TryInto::try_into).transpose()?;
        let opening_hours = hours
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<_, _>>()?;
        let lunch_menus = lunch_menus
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<_, _>>()?;
        Ok(Self {
            id: parse_id(id)?,
            name,
            cuisines: tags(cuisines),
            features: tags(features),
            rating: checked_rating,
            location,
            opening_hours,
            lunch_menus,
            contact: contact.map(Into::into),
            images: image_urls(images),
            popular_dishes,
        })
    }
}

impl From<e::restaurant::Restaurant> for Restaurant {
    fn from(from: e::restaurant::Restaurant) -> Self {
        let e::restaurant::Restaurant {
            id,
            name,
            cuisines,
            features,
            rating,
            location,
            opening_hours,
            lunch_menus,
            contact,
            images,
            popular_dishes,
        } = from;
        Self {
            id: id.into(),
            name,
            cuisines: tag_dtos(cuisines),
            features: tag_dtos(features),
            rating: rating.into(),
            images: image_dtos(images),
            location: location.map(Into::into),
            hours: opening_hours.into_iter().map(Into::into).collect(),
            lunch_menus: lunch_menus.into_iter().map(Into::into).collect(),
            contact: contact.map(Into::into),
            popular_dishes,
        }
    }
}

impl From<&e::restaurant::Restaurant> for RestaurantSummary {
    fn from(from: &e::restaurant::Restaurant) -> Self {
        let address = from.location.as_ref().and_then(|l| {
            let parts: Vec<_> = [l.address.street.as_deref(), l.address.city.as_deref()]
                .into_iter()
                .flatten()
                .collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        });
        Self {
            id: from.id.to_string(),
            name: from.name.clone(),
            cuisines: from.cuisines.iter().map(|c| c.name.clone()).collect(),
            rating: from.rating.into(),
            address,
            cheapest_price: from.cheapest_price().map(Into::into),
            image_url: from.images.first().cloned(),
        }
    }
}
