//! Address and checkout contact submissions.

use paloma_core::DeliveryMethod;
use serde::Deserialize;
use tracing::warn;

use crate::error::{FieldError, IntakeError};
use crate::geo::{self, GeoDirectory};
use crate::models::Address;
use crate::validate;

/// A bare address as posted inside an order submission.
///
/// Carries no contact identity; required-field rules are applied by the
/// billing/shipping form validators before the order is bound.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddressSubmission {
    pub address: String,
    pub state: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Free-text delivery note ("call on arrival").
    pub call: String,
    pub receiver_name: String,
    /// Whether the order ships to this address rather than being picked up.
    pub shipping: bool,
}

impl AddressSubmission {
    /// Map the submission onto the domain address shape.
    ///
    /// Pure structural copy with no error path; always succeeds.
    #[must_use]
    pub fn bind(&self) -> Address {
        Address {
            address: self.address.clone(),
            state: self.state.clone(),
            city: self.city.clone(),
            country: self.country.clone(),
            postal_code: self.postal_code.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            call: self.call.clone(),
            receiver_name: self.receiver_name.clone(),
            shipping: self.shipping,
        }
    }
}

/// The billing form posted at checkout: an address plus contact identity
/// and the chosen delivery method.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BillingSubmission {
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    pub email: String,
    pub state: String,
    pub city: String,
    pub country: String,
    pub address: String,
    pub home: String,
    pub county: String,
    pub postal_code: String,
    pub phone: String,
    /// Delivery-method code; the label is derived from it when absent.
    pub send_way: u8,
    pub send_way_name: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    pub receiver_name: String,
    pub information: String,
    pub shipping: bool,
}

impl BillingSubmission {
    /// Validate the form, returning a normalized copy.
    ///
    /// Resolves the delivery-method label first, then checks fields in
    /// declaration order, then the state/city pair.
    ///
    /// # Errors
    ///
    /// The first field violation or an unknown location, whichever comes
    /// first.
    pub fn validate(&self, geo: &impl GeoDirectory) -> Result<Self, IntakeError> {
        let form = self.resolve_send_way();
        form.check_fields()?;
        validate_location(geo, &form.state, &form.city)?;
        Ok(form)
    }

    fn resolve_send_way(&self) -> Self {
        let mut form = self.clone();
        if form.send_way_name.is_empty() {
            form.send_way_name = DeliveryMethod::from_code(form.send_way).label().to_owned();
        }
        form
    }

    fn check_fields(&self) -> Result<(), FieldError> {
        validate::required("firstname", &self.first_name)?;
        validate::required("lastname", &self.last_name)?;
        validate::required("email", &self.email)?;
        validate::email("email", &self.email)?;
        validate::required("state", &self.state)?;
        validate::required("city", &self.city)?;
        validate::required("country", &self.country)?;
        validate::required("address", &self.address)?;
        validate::required("postal_code", &self.postal_code)?;
        validate::required("phone", &self.phone)?;
        validate::required("send_way_name", &self.send_way_name)?;
        Ok(())
    }
}

/// The shipping form posted at checkout when the order ships somewhere
/// other than the billing address. Identical to billing minus the
/// shipping flag.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShippingSubmission {
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    pub email: String,
    pub state: String,
    pub city: String,
    pub country: String,
    pub address: String,
    pub home: String,
    pub county: String,
    pub postal_code: String,
    pub phone: String,
    /// Delivery-method code; the label is derived from it when absent.
    pub send_way: u8,
    pub send_way_name: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    pub receiver_name: String,
    pub information: String,
}

impl ShippingSubmission {
    /// Validate the form, returning a normalized copy.
    ///
    /// Resolves the delivery-method label first, then checks fields in
    /// declaration order, then the state/city pair.
    ///
    /// # Errors
    ///
    /// The first field violation or an unknown location, whichever comes
    /// first.
    pub fn validate(&self, geo: &impl GeoDirectory) -> Result<Self, IntakeError> {
        let form = self.resolve_send_way();
        form.check_fields()?;
        validate_location(geo, &form.state, &form.city)?;
        Ok(form)
    }

    fn resolve_send_way(&self) -> Self {
        let mut form = self.clone();
        if form.send_way_name.is_empty() {
            form.send_way_name = DeliveryMethod::from_code(form.send_way).label().to_owned();
        }
        form
    }

    fn check_fields(&self) -> Result<(), FieldError> {
        validate::required("firstname", &self.first_name)?;
        validate::required("lastname", &self.last_name)?;
        validate::required("email", &self.email)?;
        validate::email("email", &self.email)?;
        validate::required("state", &self.state)?;
        validate::required("city", &self.city)?;
        validate::required("country", &self.country)?;
        validate::required("address", &self.address)?;
        validate::required("postal_code", &self.postal_code)?;
        validate::required("phone", &self.phone)?;
        validate::required("send_way_name", &self.send_way_name)?;
        Ok(())
    }
}

fn validate_location(
    geo: &impl GeoDirectory,
    state: &str,
    city: &str,
) -> Result<(), IntakeError> {
    geo::validate_location(geo, state, city).inspect_err(|_| {
        warn!(state, city, "checkout form rejected: unknown location");
    })
}
