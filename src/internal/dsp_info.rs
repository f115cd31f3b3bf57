//! The one registered patch: rewrites the `settings_dsp_info` route handler
//! for the new form structure (billing/shipping address split, logo upload,
//! operations start month).
//!
//! The settings model, form semantics, and upload handling all belong to the
//! external web application; everything below the anchor is carried as
//! literal replacement text only.

use once_cell::sync::Lazy;

use super::patch::SourcePatch;

/// File the migration targets when no `--file` is given.
pub const DEFAULT_TARGET: &str = "app.py";

/// Spans from the handler signature through the old return statement,
/// tolerating whatever body sits between them.
const ANCHOR: &str = r"(?s)def settings_dsp_info\(\):.*?return render_template\('settings/dsp_info\.html', dsp_settings=dsp_settings\)";

/// Unique to the new handler; an input carrying it has already been patched.
const APPLIED_MARKER: &str =
    "render_template('settings/dsp_info.html', form_data=form_data)";

/// The new handler body, inserted verbatim in place of the anchored span.
const REPLACEMENT: &str = r#"def settings_dsp_info():
    """Handle DSP settings form submission and display."""
    
    # Get existing DSP settings for the current user
    dsp_settings = DSPSettings.query.filter_by(user_id=current_user.id).first()
    
    if request.method == 'POST':
        try:
            # Handle file upload for logo
            logo_file = request.files.get('logo_file')
            logo_filename = None
            
            if logo_file and logo_file.filename:
                # Secure the filename and save to uploads directory
                from werkzeug.utils import secure_filename
                import os
                
                upload_folder = os.path.join(app.static_folder, 'uploads', 'logos')
                os.makedirs(upload_folder, exist_ok=True)
                
                logo_filename = secure_filename(logo_file.filename)
                logo_path = os.path.join(upload_folder, logo_filename)
                logo_file.save(logo_path)
            
            if dsp_settings:
                # Update existing settings with new form field mapping
                dsp_settings.country = request.form.get('country', '')
                dsp_settings.proprietor_name = request.form.get('proprietor_name', '')
                dsp_settings.business_name = request.form.get('business_name', '')
                dsp_settings.time_zone = request.form.get('timezone', '')
                
                # Parse operations start month
                start_month_str = request.form.get('start_month', '')
                if start_month_str:
                    try:
                        from datetime import datetime
                        dsp_settings.operations_start_month = datetime.strptime(start_month_str + '-01', '%Y-%m-%d').date()
                    except ValueError:
                        dsp_settings.operations_start_month = None
                
                # Business address (billing address)
                dsp_settings.street_address = request.form.get('billing_address1', '')
                dsp_settings.address_line_2 = request.form.get('billing_address2', '')
                dsp_settings.city = request.form.get('billing_city', '')
                dsp_settings.state_region = request.form.get('billing_state', '')
                dsp_settings.zip_code = request.form.get('billing_zip', '')
                dsp_settings.phone_number = request.form.get('billing_phone', '')
                
                # Same as shipping address checkbox
                dsp_settings.same_as_shipping = 'same_as_shipping' in request.form
                
                # Shipping address (only if different from billing)
                if not dsp_settings.same_as_shipping:
                    dsp_settings.shipping_street_address = request.form.get('shipping_address1', '')
                    dsp_settings.shipping_address_line_2 = request.form.get('shipping_address2', '')
                    dsp_settings.shipping_city = request.form.get('shipping_city', '')
                    dsp_settings.shipping_state_region = request.form.get('shipping_state', '')
                    dsp_settings.shipping_zip_code = request.form.get('shipping_zip', '')
                    dsp_settings.shipping_phone_number = request.form.get('shipping_phone', '')
                else:
                    # Clear shipping address if same as billing
                    dsp_settings.shipping_street_address = ''
                    dsp_settings.shipping_address_line_2 = ''
                    dsp_settings.shipping_city = ''
                    dsp_settings.shipping_state_region = ''
                    dsp_settings.shipping_zip_code = ''
                    dsp_settings.shipping_phone_number = ''
            else:
                # Create new settings with new form field mapping
                from datetime import datetime
                start_month_str = request.form.get('start_month', '')
                operations_start_month = None
                if start_month_str:
                    try:
                        operations_start_month = datetime.strptime(start_month_str + '-01', '%Y-%m-%d').date()
                    except ValueError:
                        operations_start_month = None
                
                same_as_shipping = 'same_as_shipping' in request.form
                
                dsp_settings = DSPSettings(
                    user_id=current_user.id,
                    country=request.form.get('country', ''),
                    proprietor_name=request.form.get('proprietor_name', ''),
                    business_name=request.form.get('business_name', ''),
                    time_zone=request.form.get('timezone', ''),
                    operations_start_month=operations_start_month,
                    street_address=request.form.get('billing_address1', ''),
                    address_line_2=request.form.get('billing_address2', ''),
                    city=request.form.get('billing_city', ''),
                    state_region=request.form.get('billing_state', ''),
                    zip_code=request.form.get('billing_zip', ''),
                    phone_number=request.form.get('billing_phone', ''),
                    same_as_shipping=same_as_shipping,
                    shipping_street_address=request.form.get('shipping_address1', '') if not same_as_shipping else '',
                    shipping_address_line_2=request.form.get('shipping_address2', '') if not same_as_shipping else '',
                    shipping_city=request.form.get('shipping_city', '') if not same_as_shipping else '',
                    shipping_state_region=request.form.get('shipping_state', '') if not same_as_shipping else '',
                    shipping_zip_code=request.form.get('shipping_zip', '') if not same_as_shipping else '',
                    shipping_phone_number=request.form.get('shipping_phone', '') if not same_as_shipping else '',
                )
                db.session.add(dsp_settings)
            
            db.session.commit()
            flash('DSP Settings saved successfully!', 'success')
            return redirect(url_for('settings_dsp_info'))
            
        except Exception as e:
            db.session.rollback()
            flash(f'Error saving DSP settings: {str(e)}', 'error')
            print(f"Error saving DSP settings: {str(e)}")  # Debug print
    
    # Convert DSP settings to form data for template
    form_data = None
    if dsp_settings:
        form_data = {
            'country': dsp_settings.country,
            'proprietor_name': dsp_settings.proprietor_name,
            'business_name': dsp_settings.business_name,
            'timezone': dsp_settings.time_zone,
            'start_month': dsp_settings.operations_start_month.strftime('%Y-%m') if dsp_settings.operations_start_month else '',
            'billing_address1': dsp_settings.street_address,
            'billing_address2': dsp_settings.address_line_2,
            'billing_city': dsp_settings.city,
            'billing_state': dsp_settings.state_region,
            'billing_zip': dsp_settings.zip_code,
            'billing_phone': dsp_settings.phone_number,
            'same_as_shipping': dsp_settings.same_as_shipping,
            'shipping_address1': dsp_settings.shipping_street_address,
            'shipping_address2': dsp_settings.shipping_address_line_2,
            'shipping_city': dsp_settings.shipping_city,
            'shipping_state': dsp_settings.shipping_state_region,
            'shipping_zip': dsp_settings.shipping_zip_code,
            'shipping_phone': dsp_settings.shipping_phone_number,
        }
    
    return render_template('settings/dsp_info.html', form_data=form_data)"#;

static PATCH: Lazy<SourcePatch> = Lazy::new(|| {
    SourcePatch::new(
        "dsp-info-route",
        "rewrite the DSP Info settings handler for the new form structure",
        DEFAULT_TARGET,
        ANCHOR,
        REPLACEMENT,
        APPLIED_MARKER,
    )
});

pub fn patch() -> &'static SourcePatch {
    &PATCH
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::patch::PatchOutcome;

    const LEGACY_HANDLER: &str = "def settings_dsp_info():\n    dsp_settings = DSPSettings.query.filter_by(user_id=current_user.id).first()\n    if request.method == 'POST':\n        dsp_settings.business_name = request.form.get('business_name', '')\n        db.session.commit()\n    return render_template('settings/dsp_info.html', dsp_settings=dsp_settings)";

    #[test]
    fn anchor_matches_legacy_handler() {
        match patch().apply(LEGACY_HANDLER) {
            PatchOutcome::Applied(patched) => assert_eq!(patched, REPLACEMENT),
            _ => panic!("legacy handler should match the anchor"),
        }
    }

    #[test]
    fn applied_marker_distinguishes_old_from_new() {
        assert!(REPLACEMENT.contains(APPLIED_MARKER));
        assert!(!LEGACY_HANDLER.contains(APPLIED_MARKER));
    }

    #[test]
    fn patched_handler_reads_the_new_form_fields() {
        for field in [
            "proprietor_name",
            "billing_address1",
            "shipping_address1",
            "same_as_shipping",
            "start_month",
            "logo_file",
        ] {
            assert!(REPLACEMENT.contains(field), "missing form field {field}");
        }
    }

    #[test]
    fn second_application_is_recognized() {
        assert!(matches!(
            patch().apply(REPLACEMENT),
            PatchOutcome::AlreadyApplied
        ));
    }
}
