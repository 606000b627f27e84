/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to User. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::assigned_license::*;
use crate::types::directory_object::*;
use crate::types::mailbox_settings::*;
use serde_json::{Map, Value};
use time::OffsetDateTime;
#[doc = "Represents a Microsoft Entra user account."]
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    directory_object: DirectoryObject,
    about_me: Option<String>,
    account_enabled: Option<bool>,
    age_group: Option<String>,
    assigned_licenses: Option<Vec<AssignedLicense>>,
    birthday: Option<OffsetDateTime>,
    business_phones: Option<Vec<String>>,
    city: Option<String>,
    company_name: Option<String>,
    country: Option<String>,
    created_date_time: Option<OffsetDateTime>,
    department: Option<String>,
    display_name: Option<String>,
    employee_hire_date: Option<OffsetDateTime>,
    employee_id: Option<String>,
    given_name: Option<String>,
    job_title: Option<String>,
    mail: Option<String>,
    mail_nickname: Option<String>,
    mailbox_settings: Option<MailboxSettings>,
    mobile_phone: Option<String>,
    office_location: Option<String>,
    other_mails: Option<Vec<String>>,
    preferred_language: Option<String>,
    surname: Option<String>,
    user_principal_name: Option<String>,
    user_type: Option<String>,
}
impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}
impl User {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.user";
    pub fn new() -> Self {
        let mut this = Self {
            directory_object: DirectoryObject::new(),
            about_me: None,
            account_enabled: None,
            age_group: None,
            assigned_licenses: None,
            birthday: None,
            business_phones: None,
            city: None,
            company_name: None,
            country: None,
            created_date_time: None,
            department: None,
            display_name: None,
            employee_hire_date: None,
            employee_id: None,
            given_name: None,
            job_title: None,
            mail: None,
            mail_nickname: None,
            mailbox_settings: None,
            mobile_phone: None,
            office_location: None,
            other_mails: None,
            preferred_language: None,
            surname: None,
            user_principal_name: None,
            user_type: None,
        };
        this.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        this
    }
    #[doc = "Accessor to inherited properties from `DirectoryObject`."]
    pub fn directory_object(&self) -> &DirectoryObject {
        &self.directory_object
    }
    #[doc = "Mutable accessor to inherited properties from `DirectoryObject`."]
    pub fn directory_object_mut(&mut self) -> &mut DirectoryObject {
        &mut self.directory_object
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.directory_object.odata_type()
    }
    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.directory_object.set_odata_type(value);
    }
    #[doc = "A freeform text entry field for the user to describe themselves.\n\n Returned only on `$select`."]
    pub fn about_me(&self) -> Option<&str> {
        self.about_me.as_deref()
    }
    pub fn set_about_me(&mut self, value: Option<String>) {
        self.about_me = value;
    }
    #[doc = "true if the account is enabled; otherwise, false.\n\n This property is required when a user is created."]
    pub fn account_enabled(&self) -> Option<bool> {
        self.account_enabled
    }
    pub fn set_account_enabled(&mut self, value: Option<bool>) {
        self.account_enabled = value;
    }
    #[doc = "Sets the age group of the user.\n\n Allowed values: `null`, `Minor`, `NotAdult`, and `Adult`."]
    pub fn age_group(&self) -> Option<&str> {
        self.age_group.as_deref()
    }
    pub fn set_age_group(&mut self, value: Option<String>) {
        self.age_group = value;
    }
    #[doc = "The licenses that are assigned to the user, including inherited (group-based) licenses.\n\n Not nullable."]
    pub fn assigned_licenses(&self) -> Option<&[AssignedLicense]> {
        self.assigned_licenses.as_deref()
    }
    pub fn set_assigned_licenses(&mut self, value: Option<Vec<AssignedLicense>>) {
        self.assigned_licenses = value;
    }
    #[doc = "The birthday of the user.\n\n The Timestamp type represents date and time information using ISO 8601 format and is always in UTC."]
    pub fn birthday(&self) -> Option<OffsetDateTime> {
        self.birthday
    }
    pub fn set_birthday(&mut self, value: Option<OffsetDateTime>) {
        self.birthday = value;
    }
    #[doc = "The telephone numbers for the user.\n\n NOTE: Although it's a string collection, only one number can be set for this property."]
    pub fn business_phones(&self) -> Option<&[String]> {
        self.business_phones.as_deref()
    }
    pub fn set_business_phones(&mut self, value: Option<Vec<String>>) {
        self.business_phones = value;
    }
    #[doc = "The city where the user is located.\n\n Maximum length is 128 characters."]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }
    pub fn set_city(&mut self, value: Option<String>) {
        self.city = value;
    }
    #[doc = "The name of the company that the user is associated with.\n\n The maximum length is 64 characters."]
    pub fn company_name(&self) -> Option<&str> {
        self.company_name.as_deref()
    }
    pub fn set_company_name(&mut self, value: Option<String>) {
        self.company_name = value;
    }
    #[doc = "The country or region where the user is located; for example, US or UK.\n\n Maximum length is 128 characters."]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
    pub fn set_country(&mut self, value: Option<String>) {
        self.country = value;
    }
    #[doc = "The date and time the user was created, in ISO 8601 format and UTC.\n\n Read-only."]
    pub fn created_date_time(&self) -> Option<OffsetDateTime> {
        self.created_date_time
    }
    pub fn set_created_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.created_date_time = value;
    }
    #[doc = "The name of the department in which the user works.\n\n Maximum length is 64 characters."]
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }
    pub fn set_department(&mut self, value: Option<String>) {
        self.department = value;
    }
    #[doc = "The name displayed in the address book for the user.\n\n This value is usually the combination of the user's first name, middle initial, and family name."]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }
    #[doc = "The date and time when the user was hired or will start work in a future hire."]
    pub fn employee_hire_date(&self) -> Option<OffsetDateTime> {
        self.employee_hire_date
    }
    pub fn set_employee_hire_date(&mut self, value: Option<OffsetDateTime>) {
        self.employee_hire_date = value;
    }
    #[doc = "The employee identifier assigned to the user by the organization.\n\n The maximum length is 16 characters."]
    pub fn employee_id(&self) -> Option<&str> {
        self.employee_id.as_deref()
    }
    pub fn set_employee_id(&mut self, value: Option<String>) {
        self.employee_id = value;
    }
    #[doc = "The given name (first name) of the user.\n\n Maximum length is 64 characters."]
    pub fn given_name(&self) -> Option<&str> {
        self.given_name.as_deref()
    }
    pub fn set_given_name(&mut self, value: Option<String>) {
        self.given_name = value;
    }
    #[doc = "The user's job title.\n\n Maximum length is 128 characters."]
    pub fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }
    pub fn set_job_title(&mut self, value: Option<String>) {
        self.job_title = value;
    }
    #[doc = "The SMTP address for the user, for example, jeff@contoso.com.\n\n Changes to this property update the user's proxyAddresses collection."]
    pub fn mail(&self) -> Option<&str> {
        self.mail.as_deref()
    }
    pub fn set_mail(&mut self, value: Option<String>) {
        self.mail = value;
    }
    #[doc = "The mail alias for the user.\n\n This property must be specified when a user is created."]
    pub fn mail_nickname(&self) -> Option<&str> {
        self.mail_nickname.as_deref()
    }
    pub fn set_mail_nickname(&mut self, value: Option<String>) {
        self.mail_nickname = value;
    }
    #[doc = "Settings for the primary mailbox of the signed-in user.\n\n Returned only on `$select`."]
    pub fn mailbox_settings(&self) -> Option<&MailboxSettings> {
        self.mailbox_settings.as_ref()
    }
    pub fn set_mailbox_settings(&mut self, value: Option<MailboxSettings>) {
        self.mailbox_settings = value;
    }
    #[doc = "The primary cellular telephone number for the user.\n\n Read-only for users synced from the on-premises directory."]
    pub fn mobile_phone(&self) -> Option<&str> {
        self.mobile_phone.as_deref()
    }
    pub fn set_mobile_phone(&mut self, value: Option<String>) {
        self.mobile_phone = value;
    }
    #[doc = "The office location in the user's place of business."]
    pub fn office_location(&self) -> Option<&str> {
        self.office_location.as_deref()
    }
    pub fn set_office_location(&mut self, value: Option<String>) {
        self.office_location = value;
    }
    #[doc = "A list of other email addresses for the user; for example: ['bob@contoso.com', 'Robert@fabrikam.com'].\n\n Can store up to 250 values."]
    pub fn other_mails(&self) -> Option<&[String]> {
        self.other_mails.as_deref()
    }
    pub fn set_other_mails(&mut self, value: Option<Vec<String>>) {
        self.other_mails = value;
    }
    #[doc = "The preferred language for the user.\n\n The preferred language format is based on RFC 4646."]
    pub fn preferred_language(&self) -> Option<&str> {
        self.preferred_language.as_deref()
    }
    pub fn set_preferred_language(&mut self, value: Option<String>) {
        self.preferred_language = value;
    }
    #[doc = "The user's surname (family name or last name).\n\n Maximum length is 64 characters."]
    pub fn surname(&self) -> Option<&str> {
        self.surname.as_deref()
    }
    pub fn set_surname(&mut self, value: Option<String>) {
        self.surname = value;
    }
    #[doc = "The user principal name (UPN) of the user.\n\n The UPN is an Internet-style sign-in name for the user based on the Internet standard RFC 822."]
    pub fn user_principal_name(&self) -> Option<&str> {
        self.user_principal_name.as_deref()
    }
    pub fn set_user_principal_name(&mut self, value: Option<String>) {
        self.user_principal_name = value;
    }
    #[doc = "A string value that can be used to classify user types in your directory.\n\n The possible values are Member and Guest."]
    pub fn user_type(&self) -> Option<&str> {
        self.user_type.as_deref()
    }
    pub fn set_user_type(&mut self, value: Option<String>) {
        self.user_type = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.directory_object.write_properties(writer)?;
        writer.write_string_value(Some("aboutMe"), self.about_me.as_deref())?;
        writer.write_bool_value(Some("accountEnabled"), self.account_enabled)?;
        writer.write_string_value(Some("ageGroup"), self.age_group.as_deref())?;
        writer.write_collection_of_object_values(
            Some("assignedLicenses"),
            self.assigned_licenses.as_deref(),
        )?;
        writer.write_date_time_value(Some("birthday"), self.birthday)?;
        writer.write_collection_of_primitive_values(
            Some("businessPhones"),
            self.business_phones.as_deref(),
        )?;
        writer.write_string_value(Some("city"), self.city.as_deref())?;
        writer.write_string_value(Some("companyName"), self.company_name.as_deref())?;
        writer.write_string_value(Some("country"), self.country.as_deref())?;
        writer.write_date_time_value(Some("createdDateTime"), self.created_date_time)?;
        writer.write_string_value(Some("department"), self.department.as_deref())?;
        writer.write_string_value(Some("displayName"), self.display_name.as_deref())?;
        writer.write_date_time_value(Some("employeeHireDate"), self.employee_hire_date)?;
        writer.write_string_value(Some("employeeId"), self.employee_id.as_deref())?;
        writer.write_string_value(Some("givenName"), self.given_name.as_deref())?;
        writer.write_string_value(Some("jobTitle"), self.job_title.as_deref())?;
        writer.write_string_value(Some("mail"), self.mail.as_deref())?;
        writer.write_string_value(Some("mailNickname"), self.mail_nickname.as_deref())?;
        writer.write_object_value(Some("mailboxSettings"), self.mailbox_settings.as_ref())?;
        writer.write_string_value(Some("mobilePhone"), self.mobile_phone.as_deref())?;
        writer.write_string_value(Some("officeLocation"), self.office_location.as_deref())?;
        writer.write_collection_of_primitive_values(
            Some("otherMails"),
            self.other_mails.as_deref(),
        )?;
        writer.write_string_value(Some("preferredLanguage"), self.preferred_language.as_deref())?;
        writer.write_string_value(Some("surname"), self.surname.as_deref())?;
        writer.write_string_value(Some("userPrincipalName"), self.user_principal_name.as_deref())?;
        writer.write_string_value(Some("userType"), self.user_type.as_deref())?;
        Ok(())
    }
}
impl Serializable for User {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for User {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for User {
    fn additional_data(&self) -> &Map<String, Value> {
        self.directory_object.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.directory_object.additional_data_mut()
    }
}
impl Model for User {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields =
            inherit(DirectoryObject::field_deserializers(), Self::directory_object_mut);
        fields.insert(
            "aboutMe",
            field(|this: &mut Self, node| {
                this.about_me = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "accountEnabled",
            field(|this: &mut Self, node| {
                this.account_enabled = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "ageGroup",
            field(|this: &mut Self, node| {
                this.age_group = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "assignedLicenses",
            field(|this: &mut Self, node| {
                this.assigned_licenses = node.get_collection_of_object_values()?;
                Ok(())
            }),
        );
        fields.insert(
            "birthday",
            field(|this: &mut Self, node| {
                this.birthday = node.get_date_time_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "businessPhones",
            field(|this: &mut Self, node| {
                this.business_phones = node.get_collection_of_primitive_values()?;
                Ok(())
            }),
        );
        fields.insert(
            "city",
            field(|this: &mut Self, node| {
                this.city = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "companyName",
            field(|this: &mut Self, node| {
                this.company_name = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "country",
            field(|this: &mut Self, node| {
                this.country = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "createdDateTime",
            field(|this: &mut Self, node| {
                this.created_date_time = node.get_date_time_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "department",
            field(|this: &mut Self, node| {
                this.department = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "displayName",
            field(|this: &mut Self, node| {
                this.display_name = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "employeeHireDate",
            field(|this: &mut Self, node| {
                this.employee_hire_date = node.get_date_time_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "employeeId",
            field(|this: &mut Self, node| {
                this.employee_id = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "givenName",
            field(|this: &mut Self, node| {
                this.given_name = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "jobTitle",
            field(|this: &mut Self, node| {
                this.job_title = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "mail",
            field(|this: &mut Self, node| {
                this.mail = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "mailNickname",
            field(|this: &mut Self, node| {
                this.mail_nickname = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "mailboxSettings",
            field(|this: &mut Self, node| {
                this.mailbox_settings = node.get_object_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "mobilePhone",
            field(|this: &mut Self, node| {
                this.mobile_phone = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "officeLocation",
            field(|this: &mut Self, node| {
                this.office_location = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "otherMails",
            field(|this: &mut Self, node| {
                this.other_mails = node.get_collection_of_primitive_values()?;
                Ok(())
            }),
        );
        fields.insert(
            "preferredLanguage",
            field(|this: &mut Self, node| {
                this.preferred_language = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "surname",
            field(|this: &mut Self, node| {
                this.surname = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "userPrincipalName",
            field(|this: &mut Self, node| {
                this.user_principal_name = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "userType",
            field(|this: &mut Self, node| {
                this.user_type = node.get_string_value()?;
                Ok(())
            }),
        );
        fields
    }
}
