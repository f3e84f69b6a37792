//! Field value dispatch, one handler per field type.

pub mod composite;
pub mod finance;
pub mod identity;
pub mod primitives;
pub mod semantic;

use rand::RngCore;
use serde_json::Value;

use amlsynth_core::{FieldDefinition, FieldType};

use crate::context::GenerationContext;
use crate::errors::Result;
use crate::locale::{self, Script};
use crate::resolver::SchemaResolver;

pub(crate) fn generate_field(
    resolver: &SchemaResolver<'_>,
    field: &FieldDefinition,
    ctx: &GenerationContext,
    rng: &mut dyn RngCore,
) -> Result<Value> {
    let country = ctx.country;
    let script = Script::for_bengali_flag(field.wants_bengali_script());
    let now = resolver.now();
    let text = Value::String;

    let value = match field.field_type {
        FieldType::CustomerId => identity::customer_id(rng),
        FieldType::CustomerIdRef => identity::customer_id_ref(resolver.pool(), ctx, rng)?,
        FieldType::AccountIdRef => identity::account_id_ref(resolver.pool(), ctx, rng)?,
        FieldType::CustomerNameFromPool => identity::name_from_pool(resolver, ctx, rng)?,
        FieldType::CustomerDobFromPool => identity::dob_from_pool(resolver, ctx, rng)?,
        FieldType::CustomerNationalityFromPool => {
            identity::nationality_from_pool(resolver, ctx, rng)?
        }

        FieldType::Uuid => text(primitives::uuid(rng)),
        FieldType::Text | FieldType::Word => text(primitives::word(rng)),
        FieldType::Number => primitives::number(rng),
        FieldType::Boolean => Value::Bool(primitives::boolean(rng)),
        FieldType::NumericId => text(primitives::numeric_id(rng)),
        FieldType::Sentence => text(primitives::sentence(rng)),
        FieldType::Paragraph => text(primitives::paragraph(rng)),
        FieldType::Date => text(primitives::past_date(now, rng)),
        FieldType::Datetime => text(primitives::recent_datetime(now, rng)),
        FieldType::DateOrNull => {
            primitives::date_or_null(now, resolver.options().date_or_null, rng)
        }
        FieldType::FutureDate => text(primitives::future_date(now, rng)),

        FieldType::Email => text(semantic::email(rng)),
        FieldType::Url => text(semantic::url(rng)),
        FieldType::CompanyName => text(semantic::company_name(rng)),
        FieldType::JobTitle => text(semantic::job_title(rng)),
        FieldType::Phone => text(locale::phone(country, rng)),
        FieldType::Address | FieldType::StreetAddress => {
            text(locale::address(country, script, rng))
        }
        FieldType::City => text(locale::city(country, rng)),
        FieldType::Country => text(locale::country(country, rng)),
        FieldType::CountryCode => text(locale::country_code(country, rng)),
        FieldType::FirstName => text(locale::first_name(country, rng)),
        FieldType::LastName => text(locale::last_name(country, rng)),
        FieldType::FullName => text(locale::full_name(country, script, rng)),
        FieldType::BankName => text(locale::bank_name(country, rng)),

        FieldType::Currency => text(finance::amount(rng)),
        FieldType::CurrencyCode => text(finance::currency_code(rng)),
        FieldType::RiskScore => finance::risk_score(rng),
        FieldType::ExchangeRate => finance::exchange_rate(rng),
        FieldType::AccountNumber => text(finance::account_number(rng)),
        FieldType::LcNumber => text(finance::lc_number(now, rng)),
        FieldType::SwiftReference => text(finance::swift_reference(rng)),
        FieldType::SwiftCode => text(finance::swift_code(rng)),
        FieldType::TradeAmount => finance::trade_amount(rng),
        FieldType::Percentage => finance::percentage(rng),
        FieldType::HsCode => text(finance::hs_code(rng)),
        FieldType::Port => text(finance::port(rng)),

        FieldType::Select => composite::select(field, rng)?,
        FieldType::Array => composite::array(resolver, field, ctx, rng)?,
        FieldType::ArrayOfStrings => composite::array_of_strings(field, rng),
        FieldType::ArrayOfCountries => composite::array_of_countries(field, country, rng),
        FieldType::ArrayOfCountryCodes => composite::array_of_country_codes(field, country, rng),
        FieldType::ArrayOfNames => composite::array_of_names(field, country, rng),
        FieldType::NestedObject => composite::nested_object(resolver, field, ctx, rng)?,
        FieldType::NestedArray => composite::nested_array(resolver, field, ctx, rng)?,
    };
    Ok(value)
}
