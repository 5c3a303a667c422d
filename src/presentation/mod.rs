pub mod photo_markup;
